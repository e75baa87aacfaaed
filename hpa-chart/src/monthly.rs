use crate::{padded_range, Chart};
use hpa_core::record::MonthlyAggregate;
use plotters::{
    coord::{
        combinators::{BindKeyPoints, WithKeyPoints},
        types::RangedCoordf64,
        Shift,
    },
    prelude::*,
};

pub const MONTHLY_TITLE: &str = "Monthly Average Power Output (2024)";

/// Month axis with one tick on each of 1..=12.
///
/// Half-month margins keep the first and last markers off the frame.
pub fn month_axis() -> WithKeyPoints<RangedCoordf64> {
    let ticks: Vec<f64> = (1..=12).map(f64::from).collect();
    RangedCoordf64::from(0.5f64..12.5f64).with_key_points(ticks)
}

/// Mean power output per calendar month, drawn as a line with markers.
pub struct MonthlyChart<'a> {
    pub monthly: &'a [MonthlyAggregate],
}

impl<'a> MonthlyChart<'a> {
    pub fn new(monthly: &'a [MonthlyAggregate]) -> MonthlyChart<'a> {
        MonthlyChart { monthly }
    }
}

impl Chart for MonthlyChart<'_> {
    fn name(&self) -> &'static str {
        "Monthly average"
    }

    fn size(&self) -> (u32, u32) {
        (1000, 500)
    }

    fn is_empty(&self) -> bool {
        self.monthly.is_empty()
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<(), DB> {
        root.fill(&WHITE)?;
        let points: Vec<(f64, f64)> = self
            .monthly
            .iter()
            .map(|m| (f64::from(m.month), m.power_output))
            .collect();
        let y_range = padded_range(points.iter().map(|p| p.1));

        let mut chart = ChartBuilder::on(root)
            .caption(MONTHLY_TITLE, ("sans-serif", 22))
            .margin(20i32)
            .x_label_area_size(40u32)
            .y_label_area_size(60u32)
            .build_cartesian_2d(month_axis(), y_range)?;
        chart
            .configure_mesh()
            .x_labels(12_usize)
            .x_label_formatter(&|m: &f64| format!("{}", m.round() as i64))
            .x_desc("Month")
            .y_desc("Average Power Output (MW)")
            .draw()?;

        chart.draw_series(LineSeries::new(points.iter().copied(), BLUE))?;
        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, 4, BLUE.filled())),
        )?;
        root.present()
    }
}
