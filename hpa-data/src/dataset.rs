//! Delimited-file persistence of the daily table.

use csv::{ReaderBuilder, WriterBuilder};
use hpa_core::{
    error::{HpaError, Result},
    record::{DailyRecord, DATASET_HEADER},
};
use log::info;
use std::{
    io::{Read, Write},
    path::Path,
};

/// Serialize records with a header row to any writer.
pub fn write_records<W: Write>(writer: W, records: &[DailyRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parse records from a reader; the header must carry the dataset labels.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<DailyRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    if headers.iter().map(str::trim).ne(DATASET_HEADER) {
        return Err(HpaError::InvalidFormat(format!(
            "unexpected dataset header: {:?}",
            headers
        )));
    }
    let records = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<DailyRecord>, csv::Error>>()?;
    Ok(records)
}

/// Write the dataset file, one row per day.
pub fn write_dataset(path: &Path, records: &[DailyRecord]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_records(file, records)?;
    info!("Dataset saved as {}", path.display());
    Ok(())
}

/// Load a dataset file previously produced by [`write_dataset`].
pub fn read_dataset(path: &Path) -> Result<Vec<DailyRecord>> {
    let file = std::fs::File::open(path)?;
    let records = read_records(file)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Vec<DailyRecord> {
        vec![
            DailyRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                water_inflow: 1224.84,
                rainfall: 8.31,
                reservoir_level: 302.12,
                power_output: 447.0,
            },
            DailyRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                water_inflow: 1193.09,
                rainfall: 1.25,
                reservoir_level: 301.64,
                power_output: 412.57,
            },
        ]
    }

    #[test]
    fn test_header_and_rows() {
        let mut buf = Vec::new();
        write_records(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Date,Water Inflow (m³/s),Rainfall (mm),Reservoir Level (m),Power Output (MW)")
        );
        assert_eq!(lines.next(), Some("2024-01-01,1224.84,8.31,302.12,447.0"));
        assert_eq!(lines.next(), Some("2024-01-02,1193.09,1.25,301.64,412.57"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_read_back() {
        let mut buf = Vec::new();
        write_records(&mut buf, &sample()).unwrap();
        let records = read_records(buf.as_slice()).unwrap();
        assert_eq!(records, sample());
    }

    #[test]
    fn test_read_rejects_foreign_header() {
        let text = "STATION_ID,DATE,VALUE\nVIL,20220215,9593\n";
        assert!(matches!(
            read_records(text.as_bytes()),
            Err(HpaError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("hpa-data-missing-dir")
            .join("nested")
            .join("dataset.csv");
        assert!(matches!(
            write_dataset(&path, &sample()),
            Err(HpaError::Io(_))
        ));
    }
}
