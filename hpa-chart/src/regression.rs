use crate::{padded_range, Chart};
use hpa_core::record::{DailyRecord, POWER_OUTPUT_LABEL, WATER_INFLOW_LABEL};
use plotters::{coord::Shift, prelude::*};

pub const REGRESSION_TITLE: &str = "Inflow vs Power Output (with Regression Line)";

/// Scatter of daily inflow against power output with a fitted line.
pub struct RegressionChart<'a> {
    pub records: &'a [DailyRecord],
    /// Fitted `(inflow, power)` pairs, sorted by inflow
    pub line: &'a [(f64, f64)],
}

impl<'a> RegressionChart<'a> {
    pub fn new(records: &'a [DailyRecord], line: &'a [(f64, f64)]) -> RegressionChart<'a> {
        RegressionChart { records, line }
    }
}

impl Chart for RegressionChart<'_> {
    fn name(&self) -> &'static str {
        "Regression"
    }

    fn size(&self) -> (u32, u32) {
        (800, 600)
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<(), DB> {
        root.fill(&WHITE)?;
        let x_range = padded_range(self.records.iter().map(|r| r.water_inflow));
        let y_range = padded_range(
            self.records
                .iter()
                .map(|r| r.power_output)
                .chain(self.line.iter().map(|p| p.1)),
        );

        let mut chart = ChartBuilder::on(root)
            .caption(REGRESSION_TITLE, ("sans-serif", 22))
            .margin(20i32)
            .x_label_area_size(40u32)
            .y_label_area_size(60u32)
            .build_cartesian_2d(x_range, y_range)?;
        chart
            .configure_mesh()
            .x_desc(WATER_INFLOW_LABEL)
            .y_desc(POWER_OUTPUT_LABEL)
            .draw()?;

        let point_style = BLUE.mix(0.5).filled();
        chart
            .draw_series(
                self.records
                    .iter()
                    .map(|r| Circle::new((r.water_inflow, r.power_output), 2, point_style)),
            )?
            .label("Daily data")
            .legend(move |(x, y)| Circle::new((x + 10, y), 3, point_style));
        chart
            .draw_series(LineSeries::new(self.line.iter().copied(), RED))?
            .label("Regression line")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        root.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_regression_svg() {
        let records: Vec<DailyRecord> = (0..30)
            .map(|i| DailyRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i),
                water_inflow: 1150.0 + (i * 7 % 13) as f64 * 10.0,
                rainfall: 10.0,
                reservoir_level: 301.0,
                power_output: 430.0 + (i * 5 % 11) as f64,
            })
            .collect();
        let line = vec![(1150.0, 425.0), (1270.0, 467.0)];
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (800, 600)).into_drawing_area();
            RegressionChart::new(&records, &line).draw(&root).unwrap();
        }
        assert!(svg.contains(REGRESSION_TITLE));
        assert!(svg.contains("Daily data"));
        assert!(svg.contains("Regression line"));
        assert!(svg.contains("<circle"));
    }
}
