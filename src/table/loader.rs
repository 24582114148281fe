//! Excel workbook loading via calamine.
//!
//! Each sheet is read with its first row as the header; remaining rows
//! become data rows with cells mapped onto [`CellValue`]. Native Excel
//! date/time cells convert to [`CellValue::DateTime`]; error cells and
//! durations are treated as missing.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use super::{CellValue, Table, Workbook};
use crate::error::{PrepError, Result};

/// Load every sheet of an Excel file into a [`Workbook`].
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let mut reader = open_workbook_auto(path)?;
    let names: Vec<String> = reader.sheet_names().to_vec();

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = reader.worksheet_range(&name)?;
        sheets.push(sheet_from_range(&name, range.rows()));
    }

    if sheets.is_empty() {
        return Err(PrepError::Spreadsheet("workbook has no sheets".to_string()));
    }
    Ok(Workbook::from_sheets(sheets))
}

fn sheet_from_range(name: &str, mut rows: calamine::Rows<'_, Data>) -> Table {
    let headers = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(i, cell)| header_name(cell, i))
            .collect(),
        None => Vec::new(),
    };

    let data = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Table::new(name, headers, data)
}

/// Header cells are stringified; blanks get positional fallback names.
fn header_name(cell: &Data, index: usize) -> String {
    match cell {
        Data::Empty => format!("column_{}", index + 1),
        Data::String(s) if s.trim().is_empty() => format!("column_{}", index + 1),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::DateTime(naive),
            None => CellValue::Empty,
        },
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        // Formula errors and durations carry no usable value
        Data::Error(_) | Data::DurationIso(_) => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_fall_back_positionally() {
        assert_eq!(header_name(&Data::Empty, 0), "column_1");
        assert_eq!(header_name(&Data::String("  ".into()), 2), "column_3");
        assert_eq!(header_name(&Data::String(" value ".into()), 0), "value");
        assert_eq!(header_name(&Data::Float(7.0), 0), "7");
    }

    #[test]
    fn cells_convert_to_model_types() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(convert_cell(&Data::Float(1.5)), CellValue::Number(1.5));
        assert_eq!(convert_cell(&Data::Int(-3)), CellValue::Number(-3.0));
        assert_eq!(convert_cell(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(
            convert_cell(&Data::String("abc".into())),
            CellValue::Text("abc".into())
        );
        assert_eq!(convert_cell(&Data::String("   ".into())), CellValue::Empty);
    }

    #[test]
    fn missing_file_is_a_spreadsheet_error() {
        let err = load_workbook("/nonexistent/path/data.xlsx").unwrap_err();
        assert!(matches!(
            err,
            PrepError::Spreadsheet(_) | PrepError::Io(_)
        ));
    }
}
