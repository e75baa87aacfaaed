//! Ordinary least squares solver.
//!
//! Solves `minimize Σ (y_i - x_i^T β)^2` through an SVD of the design
//! matrix. Singular values are compared against a tolerance relative to the
//! largest one, so columns on very different scales (inflow in the
//! thousands, rainfall in the tens) are judged consistently.

use hpa_core::error::{HpaError, Result};
use nalgebra::{DMatrix, DVector};

/// Relative singular value cutoff below which the design is rank deficient.
pub const RELATIVE_TOLERANCE: f64 = 1e-10;

/// Solve a least squares problem, rejecting rank deficient designs.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<DVector<f64>> {
    if x.nrows() != y.len() {
        return Err(HpaError::Regression(format!(
            "design has {} rows but target has {}",
            x.nrows(),
            y.len()
        )));
    }
    if x.nrows() < x.ncols() {
        return Err(HpaError::Regression(format!(
            "{} observations cannot determine {} parameters",
            x.nrows(),
            x.ncols()
        )));
    }

    let svd = x.clone().svd(true, true);
    let largest = svd.singular_values.max();
    if !largest.is_finite() || largest <= 0.0 {
        return Err(HpaError::Regression("design matrix is empty or non-finite".into()));
    }
    let tolerance = largest * RELATIVE_TOLERANCE;
    if svd.rank(tolerance) < x.ncols() {
        return Err(HpaError::Regression(
            "design matrix is rank deficient (collinear predictors)".into(),
        ));
    }

    let beta = svd
        .solve(y, tolerance)
        .map_err(|e| HpaError::Regression(e.to_string()))?;
    if !beta.iter().all(|v| v.is_finite()) {
        return Err(HpaError::Regression("solution is not finite".into()));
    }
    Ok(beta)
}
