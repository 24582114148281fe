//! Tabular data model: workbooks, sheets, and typed cells.
//!
//! Uploaded spreadsheets arrive as named sheets of named columns with
//! heterogeneous cell types. This module holds the in-memory model; loading
//! from Excel files lives in [`loader`] and row selection in [`filter`].

pub mod filter;
pub mod loader;

use crate::error::{PrepError, Result};
use chrono::NaiveDateTime;

pub use filter::{date_range_indices, numeric_values, parse_cell_date};
pub use loader::load_workbook;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing value.
    Empty,
    /// Boolean cell.
    Bool(bool),
    /// Numeric cell (integers widen to f64).
    Number(f64),
    /// Text cell.
    Text(String),
    /// Native date/time cell.
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Numeric view of the cell, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// True for [`CellValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// A single sheet: a header row plus rows of cells.
///
/// Rows are positionally indexed; every row has one cell per header (short
/// rows are padded with [`CellValue::Empty`] at load time).
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table from a header row and data rows.
    ///
    /// Rows shorter than the header are padded with empty cells; longer rows
    /// are truncated to the header width.
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Sheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column header names, in order.
    pub fn column_names(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Position of a named column.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PrepError::ColumnNotFound(name.to_string()))
    }

    /// A cell by row and column index.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        &self.rows[row][col]
    }

    /// Names of columns whose non-empty cells are all numeric.
    ///
    /// Columns that are entirely empty do not qualify.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(col, _)| {
                let mut seen_number = false;
                for row in &self.rows {
                    match &row[*col] {
                        CellValue::Number(_) => seen_number = true,
                        CellValue::Empty => {}
                        _ => return false,
                    }
                }
                seen_number
            })
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// A new table containing only the given rows, in the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        let rows = indices.iter().map(|&i| self.rows[i].clone()).collect();
        Table {
            name: self.name.clone(),
            headers: self.headers.clone(),
            rows,
        }
    }

    /// Append a column. `cells` must have one entry per row.
    pub fn push_column(&mut self, name: impl Into<String>, cells: Vec<CellValue>) -> Result<()> {
        if cells.len() != self.rows.len() {
            return Err(PrepError::Spreadsheet(format!(
                "column length {} does not match row count {}",
                cells.len(),
                self.rows.len()
            )));
        }
        self.headers.push(name.into());
        for (row, cell) in self.rows.iter_mut().zip(cells) {
            row.push(cell);
        }
        Ok(())
    }
}

/// A workbook: one or more named sheets.
#[derive(Debug, Clone)]
pub struct Workbook {
    sheets: Vec<Table>,
}

impl Workbook {
    /// Build a workbook from already-parsed sheets.
    pub fn from_sheets(sheets: Vec<Table>) -> Self {
        Self { sheets }
    }

    /// Load a workbook from an Excel file (.xlsx, .xls, .ods).
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        load_workbook(path)
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name()).collect()
    }

    /// Look up a sheet by name.
    pub fn sheet(&self, name: &str) -> Result<&Table> {
        self.sheets
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| PrepError::SheetNotFound(name.to_string()))
    }
}
