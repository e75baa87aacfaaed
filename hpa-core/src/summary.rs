use serde::{Deserialize, Serialize};

pub const R2_METRIC: &str = "Model R2";
pub const MAE_METRIC: &str = "MAE (MW)";
pub const FORECAST_METRIC: &str = "Forecast (January Avg Power MW)";

/// Fit quality of the multi-feature model and its January forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSummary {
    pub r_squared: f64,
    /// MW
    pub mean_absolute_error: f64,
    /// MW
    pub forecast: f64,
}

/// One line of the persisted summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

impl ForecastSummary {
    /// The three rows of the summary table, in file order.
    pub fn rows(&self) -> Vec<SummaryRow> {
        [
            (R2_METRIC, self.r_squared),
            (MAE_METRIC, self.mean_absolute_error),
            (FORECAST_METRIC, self.forecast),
        ]
        .into_iter()
        .map(|(metric, value)| SummaryRow {
            metric: metric.to_string(),
            value,
        })
        .collect()
    }

    /// Rebuild a summary from persisted rows, matched by metric name.
    pub fn from_rows(rows: &[SummaryRow]) -> Option<ForecastSummary> {
        let find = |name: &str| rows.iter().find(|row| row.metric == name).map(|row| row.value);
        Some(ForecastSummary {
            r_squared: find(R2_METRIC)?,
            mean_absolute_error: find(MAE_METRIC)?,
            forecast: find(FORECAST_METRIC)?,
        })
    }
}
