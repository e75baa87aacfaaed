//! Data processing for daily hydropower records.
//!
//! This crate produces the synthetic one-year series, persists it as an
//! `.xlsx` workbook plus a delimited companion table, and reduces it to
//! monthly means for charting and forecasting.

pub mod dataset;
pub mod monthly;
pub mod summary;
pub mod synthetic;
pub mod workbook;
