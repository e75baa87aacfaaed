//! One-step forecast from a monthly aggregate.

use crate::multi::MultiFeatureFit;
use hpa_core::{
    record::MonthlyAggregate,
    summary::ForecastSummary,
};
use log::debug;

/// Month whose means feed the forecast.
pub const FORECAST_MONTH: u32 = 1;

/// Expected average power for a month with the aggregate's mean predictors.
pub fn forecast_from_aggregate(fit: &MultiFeatureFit, aggregate: &MonthlyAggregate) -> f64 {
    fit.model.predict_row(&aggregate.features())
}

/// Combine fit quality and the forecast into the persisted summary.
pub fn summarize(fit: &MultiFeatureFit, aggregate: &MonthlyAggregate) -> ForecastSummary {
    let forecast = forecast_from_aggregate(fit, aggregate);
    debug!("forecast for month {}: {} MW", aggregate.month, forecast);
    ForecastSummary {
        r_squared: fit.r_squared,
        mean_absolute_error: fit.mean_absolute_error,
        forecast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multi::fit_multi_feature;
    use hpa_data::{
        monthly::{aggregate_monthly, select_month},
        synthetic::{generate, GeneratorConfig},
    };

    #[test]
    fn test_forecast_matches_manual_dot_product() {
        let records = generate(&GeneratorConfig::default()).unwrap();
        let fit = fit_multi_feature(&records).unwrap();
        let monthly = aggregate_monthly(&records);
        let january = select_month(&monthly, FORECAST_MONTH).unwrap();

        let summary = summarize(&fit, january);
        let c = fit.model.coefficients();
        let manual = fit.model.intercept()
            + c[0] * january.water_inflow
            + c[1] * january.rainfall
            + c[2] * january.reservoir_level;
        assert!((summary.forecast - manual).abs() < 1e-9);
        assert_eq!(summary.r_squared, fit.r_squared);
        assert_eq!(summary.mean_absolute_error, fit.mean_absolute_error);
    }

    #[test]
    fn test_january_forecast_near_dry_season_output() {
        let records = generate(&GeneratorConfig::default()).unwrap();
        let fit = fit_multi_feature(&records).unwrap();
        let monthly = aggregate_monthly(&records);
        let january = select_month(&monthly, FORECAST_MONTH).unwrap();
        let forecast = forecast_from_aggregate(&fit, january);
        // 0.35 * 1200 + 2 * 10 = 440 MW outside the monsoon
        assert!((forecast - 440.0).abs() < 30.0, "{forecast}");
        assert!((forecast - january.power_output).abs() < 15.0);
    }
}
