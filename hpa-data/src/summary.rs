//! Persistence of the forecast summary table.

use csv::{ReaderBuilder, WriterBuilder};
use hpa_core::{
    error::{HpaError, Result},
    summary::{ForecastSummary, SummaryRow},
};
use log::info;
use std::{
    io::{Read, Write},
    path::Path,
};

/// Write `Metric,Value` plus one row per metric.
///
/// Floats use shortest round-trip formatting, so reading the file back
/// yields the exact in-memory values.
pub fn write_summary_to<W: Write>(writer: W, summary: &ForecastSummary) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for row in summary.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn read_summary_from<R: Read>(reader: R) -> Result<ForecastSummary> {
    let rows = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader)
        .deserialize()
        .collect::<std::result::Result<Vec<SummaryRow>, csv::Error>>()?;
    ForecastSummary::from_rows(&rows)
        .ok_or_else(|| HpaError::InvalidFormat(format!("summary rows incomplete: {:?}", rows)))
}

pub fn write_summary(path: &Path, summary: &ForecastSummary) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_summary_to(file, summary)?;
    info!("Forecast Summary saved as {}", path.display());
    Ok(())
}

pub fn read_summary(path: &Path) -> Result<ForecastSummary> {
    read_summary_from(std::fs::File::open(path)?)
}
