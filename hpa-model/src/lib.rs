//! Regression models relating inflow, rainfall and reservoir level to
//! power output.

pub mod forecast;
pub mod linear;
pub mod metrics;
pub mod multi;
pub mod ols;
pub mod simple;
