//! Single-predictor fit of power output against water inflow.

use crate::linear::LinearModel;
use hpa_core::{
    error::Result,
    record::{column, DailyRecord},
};
use log::debug;

/// `power_output = intercept + slope * water_inflow`
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleRegression {
    model: LinearModel,
}

impl SimpleRegression {
    pub fn fit(x: &[f64], y: &[f64]) -> Result<SimpleRegression> {
        let rows: Vec<[f64; 1]> = x.iter().map(|&v| [v]).collect();
        let model = LinearModel::fit(&rows, y)?;
        Ok(SimpleRegression { model })
    }

    /// Fit inflow → power over a set of daily records.
    pub fn fit_inflow_power(records: &[DailyRecord]) -> Result<SimpleRegression> {
        let inflow = column(records, |r| r.water_inflow);
        let power = column(records, |r| r.power_output);
        let fitted = SimpleRegression::fit(&inflow, &power)?;
        debug!(
            "inflow regression: slope {:.4}, intercept {:.4}",
            fitted.slope(),
            fitted.intercept()
        );
        Ok(fitted)
    }

    pub fn slope(&self) -> f64 {
        self.model.coefficients()[0]
    }

    pub fn intercept(&self) -> f64 {
        self.model.intercept()
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.model.predict_row(&[x])
    }

    /// Prediction for every input, in input order.
    pub fn predictions(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&v| self.predict(v)).collect()
    }

    /// `(x, ŷ)` pairs sorted by `x`, ready to draw as a monotone line.
    pub fn fitted_line(&self, x: &[f64]) -> Vec<(f64, f64)> {
        let mut line: Vec<(f64, f64)> = x.iter().copied().zip(self.predictions(x)).collect();
        line.sort_by(|a, b| a.0.total_cmp(&b.0));
        line
    }
}
