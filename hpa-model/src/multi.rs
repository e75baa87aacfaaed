//! Three-predictor fit of power output against inflow, rainfall and
//! reservoir level.

use crate::{
    linear::LinearModel,
    metrics::{mean_absolute_error, r_squared},
};
use hpa_core::{
    error::Result,
    record::{column, DailyRecord},
};
use log::{debug, info};

/// Fitted model together with its in-sample predictions and fit quality.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiFeatureFit {
    pub model: LinearModel,
    pub predictions: Vec<f64>,
    pub r_squared: f64,
    /// MW
    pub mean_absolute_error: f64,
}

/// Fit power output on (inflow, rainfall, reservoir level) plus intercept.
pub fn fit_multi_feature(records: &[DailyRecord]) -> Result<MultiFeatureFit> {
    let features: Vec<_> = records.iter().map(DailyRecord::features).collect();
    let target = column(records, |r| r.power_output);

    let model = LinearModel::fit(&features, &target)?;
    let predictions = model.predict(&features);
    let r2 = r_squared(&target, &predictions);
    let mae = mean_absolute_error(&target, &predictions);

    debug!(
        "multi-feature regression: intercept {:.4}, coefficients {:?}",
        model.intercept(),
        model.coefficients()
    );
    info!("Model Performance: R² = {:.3}, MAE = {:.2} MW", r2, mae);

    Ok(MultiFeatureFit {
        model,
        predictions,
        r_squared: r2,
        mean_absolute_error: mae,
    })
}
