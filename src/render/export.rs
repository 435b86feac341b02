//! CSV export of the displayed table

use super::table::{table_rows, TABLE_HEADERS};
use crate::currency::Currency;
use crate::error::Result;
use crate::projection::ProjectionResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_EXPORT_FILE: &str = "salary_projection.csv";

/// Write the header and one line per table row, using the formatted display values
pub fn write_csv<W: Write>(
    writer: W,
    result: &ProjectionResult,
    currency: Currency,
    start_year: i32,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(TABLE_HEADERS)?;
    for row in table_rows(result, currency, start_year) {
        csv_writer.write_record(row.cells())?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv_string(result: &ProjectionResult, currency: Currency, start_year: i32) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, result, currency, start_year)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn export_csv<P: AsRef<Path>>(
    path: P,
    result: &ProjectionResult,
    currency: Currency,
    start_year: i32,
) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(file, result, currency, start_year)?;
    log::info!("Exported {} rows to {}", result.records.len(), path.as_ref().display());
    Ok(())
}
