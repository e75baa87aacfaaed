//! Core types for the hydropower analytics toolkit.
//!
//! Daily plant records, their monthly aggregates and the forecast summary,
//! plus the shared error type used by every library crate.

pub mod date_range;
pub mod error;
pub mod record;
pub mod summary;
