//! Spreadsheet (`.xlsx`) rendition of the daily table.
//!
//! The workbook carries the same header and rows as the delimited dataset,
//! with real date cells. Document properties pin the creation time so the
//! same records always produce the same bytes.

use chrono::{Datelike, NaiveDate};
use hpa_core::{
    error::{HpaError, Result},
    record::{DailyRecord, DATASET_HEADER},
};
use log::info;
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook};
use std::path::Path;

pub const SHEET_NAME: &str = "Daily";
const DATE_FORMAT: &str = "yyyy-mm-dd";
const NUMBER_FORMAT: &str = "0.00";

/// Creation time stamped into every workbook.
const CREATED: (u16, u8, u8) = (2024, 1, 1);

fn excel_date(date: &NaiveDate) -> Result<ExcelDateTime> {
    let year = u16::try_from(date.year())
        .map_err(|_| HpaError::InvalidFormat(format!("date out of spreadsheet range: {date}")))?;
    Ok(ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8)?)
}

fn build_workbook(records: &[DailyRecord]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let (year, month, day) = CREATED;
    let created = ExcelDateTime::from_ymd(year, month, day)?;
    workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

    let header = Format::new().set_bold();
    let date_format = Format::new().set_num_format(DATE_FORMAT);
    let number_format = Format::new().set_num_format(NUMBER_FORMAT);

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    for (col, label) in DATASET_HEADER.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *label, &header)?;
        sheet.set_column_width(col as u16, if col == 0 { 12 } else { 22 })?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_datetime_with_format(row, 0, &excel_date(&record.date)?, &date_format)?;
        let values = [
            record.water_inflow,
            record.rainfall,
            record.reservoir_level,
            record.power_output,
        ];
        for (offset, value) in values.into_iter().enumerate() {
            sheet.write_number_with_format(row, offset as u16 + 1, value, &number_format)?;
        }
    }
    Ok(workbook)
}

/// Encode the records as `.xlsx` bytes.
pub fn workbook_bytes(records: &[DailyRecord]) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(records)?;
    Ok(workbook.save_to_buffer()?)
}

/// Write the spreadsheet file, one row per day.
pub fn write_workbook(path: &Path, records: &[DailyRecord]) -> Result<()> {
    let mut workbook = build_workbook(records)?;
    workbook.save(path)?;
    info!("Spreadsheet saved as {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_workbook_is_zip_container() {
        let bytes = workbook_bytes(&sample()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_workbook_bytes_are_stable() {
        let a = workbook_bytes(&sample()).unwrap();
        let b = workbook_bytes(&sample()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rows_change_the_bytes() {
        let full = workbook_bytes(&sample()).unwrap();
        let header_only = workbook_bytes(&[]).unwrap();
        assert_ne!(full, header_only);
    }

    #[test]
    fn test_date_before_excel_epoch_fails() {
        let mut records = sample();
        records[0].date = NaiveDate::from_ymd_opt(1850, 1, 1).unwrap();
        assert!(matches!(workbook_bytes(&records), Err(HpaError::Xlsx(_))));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("hpa-data-missing-dir")
            .join("nested")
            .join("dataset.xlsx");
        assert!(write_workbook(&path, &sample()).is_err());
    }
}
