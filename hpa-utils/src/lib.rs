//! Shared utility functions for HPA crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

}

/// Numeric helpers
pub mod numbers {
    /// Round to `decimals` places, half away from zero.
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }

    /// Arithmetic mean, `None` for an empty slice.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

}

/// Output file locations
pub mod paths {
    use std::path::{Path, PathBuf};

    pub const DATASET_FILE: &str = "THDC_Power_Analytics.csv";
    pub const WORKBOOK_FILE: &str = "THDC_Power_Analytics.xlsx";
    pub const SUMMARY_FILE: &str = "Forecast_Summary.csv";
    pub const TREND_CHART_STEM: &str = "THDC_Power_Trend";
    pub const REGRESSION_CHART_STEM: &str = "Inflow_vs_Power_Regression";
    pub const MONTHLY_CHART_STEM: &str = "Monthly_Avg_Power";

    /// Every artifact the pipeline writes, resolved against one directory.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct OutputPaths {
        pub dataset: PathBuf,
        pub workbook: PathBuf,
        pub trend_chart: PathBuf,
        pub regression_chart: PathBuf,
        pub monthly_chart: PathBuf,
        pub summary: PathBuf,
    }

    impl OutputPaths {
        /// Resolve the fixed filenames under `dir`; charts get `image_extension`.
        pub fn new(dir: &Path, image_extension: &str) -> OutputPaths {
            let image = |stem: &str| dir.join(format!("{stem}.{image_extension}"));
            OutputPaths {
                dataset: dir.join(DATASET_FILE),
                workbook: dir.join(WORKBOOK_FILE),
                trend_chart: image(TREND_CHART_STEM),
                regression_chart: image(REGRESSION_CHART_STEM),
                monthly_chart: image(MONTHLY_CHART_STEM),
                summary: dir.join(SUMMARY_FILE),
            }
        }

        /// Create `dir` (and parents) if it does not exist yet.
        pub fn prepare(dir: &Path, image_extension: &str) -> anyhow::Result<OutputPaths> {
            std::fs::create_dir_all(dir)?;
            Ok(OutputPaths::new(dir, image_extension))
        }
    }

    impl Default for OutputPaths {
        fn default() -> Self {
            OutputPaths::new(Path::new("."), "png")
        }
    }

}
