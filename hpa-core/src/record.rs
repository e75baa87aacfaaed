use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DATE_LABEL: &str = "Date";
pub const WATER_INFLOW_LABEL: &str = "Water Inflow (m³/s)";
pub const RAINFALL_LABEL: &str = "Rainfall (mm)";
pub const RESERVOIR_LEVEL_LABEL: &str = "Reservoir Level (m)";
pub const POWER_OUTPUT_LABEL: &str = "Power Output (MW)";

/// Column labels of the persisted dataset, in file order.
pub const DATASET_HEADER: [&str; 5] = [
    DATE_LABEL,
    WATER_INFLOW_LABEL,
    RAINFALL_LABEL,
    RESERVOIR_LEVEL_LABEL,
    POWER_OUTPUT_LABEL,
];

/// Number of predictors fed to the multi-feature model.
pub const FEATURE_COUNT: usize = 3;

/// One day of plant metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// m³/s
    #[serde(rename = "Water Inflow (m³/s)")]
    pub water_inflow: f64,
    /// mm
    #[serde(rename = "Rainfall (mm)")]
    pub rainfall: f64,
    /// m
    #[serde(rename = "Reservoir Level (m)")]
    pub reservoir_level: f64,
    /// MW
    #[serde(rename = "Power Output (MW)")]
    pub power_output: f64,
}

impl DailyRecord {
    /// Calendar month (1-12) of the record.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Predictors in model order: inflow, rainfall, reservoir level.
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [self.water_inflow, self.rainfall, self.reservoir_level]
    }
}

/// Mean of every numeric column across the days of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyAggregate {
    pub month: u32,
    /// Number of daily records that went into the means
    pub days: usize,
    pub water_inflow: f64,
    pub rainfall: f64,
    pub reservoir_level: f64,
    pub power_output: f64,
}

impl MonthlyAggregate {
    /// Mean predictors in model order: inflow, rainfall, reservoir level.
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [self.water_inflow, self.rainfall, self.reservoir_level]
    }
}

/// Collect one column out of a slice of records.
pub fn column<F>(records: &[DailyRecord], field: F) -> Vec<f64>
where
    F: Fn(&DailyRecord) -> f64,
{
    records.iter().map(field).collect()
}
