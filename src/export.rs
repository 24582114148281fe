//! CSV export of transformed tables.
//!
//! Output is UTF-8 with a byte-order mark so spreadsheet applications pick
//! the encoding up correctly, comma-separated, header row first, no index
//! column.

use std::path::Path;

use crate::error::{PrepError, Result};
use crate::table::{CellValue, Table};

/// UTF-8 byte-order mark.
const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Serialize a table to CSV bytes (UTF-8 with BOM).
///
/// One header line plus one line per data row; empty cells become empty
/// fields.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.extend_from_slice(BOM);

    let mut writer = csv::Writer::from_writer(buf);
    writer.write_record(table.column_names())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(render_cell))?;
    }
    writer.flush()?;

    writer
        .into_inner()
        .map_err(|e| PrepError::Csv(e.to_string()))
}

/// Write a table to a CSV file at `path`.
pub fn write_csv_file<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let bytes = to_csv_bytes(table)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn render_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Number(v) => v.to_string(),
        CellValue::Text(s) => s.clone(),
        CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}
