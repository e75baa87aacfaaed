use crate::ols::solve_least_squares;
use hpa_core::error::{HpaError, Result};
use nalgebra::{DMatrix, DVector};

/// Fitted `y = intercept + Σ coefficient_j * x_j`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> LinearModel {
        LinearModel {
            intercept,
            coefficients,
        }
    }

    /// Fit by ordinary least squares with an intercept term.
    ///
    /// Every row must hold the same number of predictors.
    pub fn fit<R: AsRef<[f64]>>(rows: &[R], target: &[f64]) -> Result<LinearModel> {
        let n_features = match rows.first() {
            Some(row) => row.as_ref().len(),
            None => return Err(HpaError::Regression("no observations to fit".into())),
        };
        if let Some(bad) = rows.iter().position(|row| row.as_ref().len() != n_features) {
            return Err(HpaError::Regression(format!(
                "row {} has {} predictors, expected {}",
                bad,
                rows[bad].as_ref().len(),
                n_features
            )));
        }

        // leading column of ones carries the intercept
        let design = DMatrix::from_fn(rows.len(), n_features + 1, |i, j| {
            if j == 0 {
                1.0
            } else {
                rows[i].as_ref()[j - 1]
            }
        });
        let y = DVector::from_column_slice(target);
        let beta = solve_least_squares(&design, &y)?;

        Ok(LinearModel {
            intercept: beta[0],
            coefficients: beta.iter().skip(1).copied().collect(),
        })
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Predict one observation. Extra or missing predictors are ignored.
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(row)
                .map(|(coefficient, x)| coefficient * x)
                .sum::<f64>()
    }

    pub fn predict<R: AsRef<[f64]>>(&self, rows: &[R]) -> Vec<f64> {
        rows.iter().map(|row| self.predict_row(row.as_ref())).collect()
    }
}
