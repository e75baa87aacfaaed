use crate::{padded_range, Chart};
use chrono::NaiveDate;
use hpa_core::record::{DailyRecord, POWER_OUTPUT_LABEL, WATER_INFLOW_LABEL};
use plotters::{coord::Shift, prelude::*};

pub const TREND_TITLE: &str = "Water Inflow vs Power Output (2024) - Simulated Data";

const POWER_COLOR: RGBColor = RGBColor(0, 128, 0);

/// Daily inflow and power output on a shared date axis.
pub struct TrendChart<'a> {
    pub records: &'a [DailyRecord],
}

impl<'a> TrendChart<'a> {
    pub fn new(records: &'a [DailyRecord]) -> TrendChart<'a> {
        TrendChart { records }
    }
}

impl Chart for TrendChart<'_> {
    fn name(&self) -> &'static str {
        "Trend"
    }

    fn size(&self) -> (u32, u32) {
        (1200, 600)
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> DrawResult<(), DB> {
        root.fill(&WHITE)?;
        let (Some(first), Some(last)) = (self.records.first(), self.records.last()) else {
            return root.present();
        };
        let y_range = padded_range(
            self.records
                .iter()
                .flat_map(|r| [r.water_inflow, r.power_output]),
        );

        let mut chart = ChartBuilder::on(root)
            .caption(TREND_TITLE, ("sans-serif", 24))
            .margin(20i32)
            .x_label_area_size(40u32)
            .y_label_area_size(60u32)
            .build_cartesian_2d(first.date..last.date, y_range)?;
        chart
            .configure_mesh()
            .x_labels(12_usize)
            .x_label_formatter(&|d: &NaiveDate| d.format("%b").to_string())
            .x_desc("Date")
            .y_desc("Value")
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                self.records.iter().map(|r| (r.date, r.water_inflow)),
                BLUE,
            ))?
            .label(WATER_INFLOW_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        chart
            .draw_series(LineSeries::new(
                self.records.iter().map(|r| (r.date, r.power_output)),
                POWER_COLOR,
            ))?
            .label(POWER_OUTPUT_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], POWER_COLOR));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        root.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<DailyRecord> {
        (1..=60)
            .map(|i| DailyRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i),
                water_inflow: 1200.0 + i as f64,
                rainfall: 10.0,
                reservoir_level: 302.0,
                power_output: 440.0 + i as f64 / 2.0,
            })
            .collect()
    }

    #[test]
    fn test_trend_svg_has_title_and_legend() {
        let records = records();
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (1200, 600)).into_drawing_area();
            TrendChart::new(&records).draw(&root).unwrap();
        }
        assert!(svg.contains(TREND_TITLE));
        assert!(svg.contains(WATER_INFLOW_LABEL));
        assert!(svg.contains(POWER_OUTPUT_LABEL));
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn test_empty_trend() {
        assert!(TrendChart::new(&[]).is_empty());
    }
}
