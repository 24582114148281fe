//! End-to-end orchestration: sheet selection, filtering, transform, merge.
//!
//! The output lives in a caller-owned [`TransformOutput`] rather than any
//! process-wide state, so independent call sites can run transforms without
//! interfering with each other.

use chrono::NaiveDate;

use crate::distribution::{compare, Histogram};
use crate::error::{PrepError, Result};
use crate::table::{date_range_indices, numeric_values, CellValue, Table, Workbook};
use crate::transform::{transform, TransformResult};

/// Suffix appended to the value column name for the transformed column.
pub const BOXCOX_SUFFIX: &str = "_boxcox";

/// Everything needed to run one transform against a workbook.
#[derive(Debug, Clone)]
pub struct TransformRequest {
    /// Sheet to analyze.
    pub sheet: String,
    /// Date-like column used for range filtering.
    pub date_column: String,
    /// Numeric column to transform.
    pub value_column: String,
    /// First day of the range, inclusive.
    pub start: NaiveDate,
    /// Last day of the range, inclusive of the entire day.
    pub end: NaiveDate,
}

/// Result of a pipeline run, owned by the caller.
///
/// Holds no reference back to the source workbook and is immutable once
/// returned.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    /// The retained rows with the appended `<value_column>_boxcox` column.
    pub table: Table,
    /// Maximum-likelihood lambda chosen for the transform.
    pub lambda: f64,
    /// Value series that went into the transform, in row order.
    pub original: Vec<f64>,
    /// Transformed series, positionally aligned with `original`.
    pub transformed: Vec<f64>,
}

impl TransformOutput {
    /// Auto-binned histograms of the original and transformed series, for
    /// the before/after preview.
    pub fn histograms(&self) -> (Histogram, Histogram) {
        compare(&self.original, &self.transformed)
    }
}

/// Run the full pipeline against one workbook.
///
/// Steps, in order: sheet lookup, date-range filter (rows with unparseable
/// dates dropped), missing-value filter on the value column, Box-Cox
/// transform, merge of the transformed column into the retained rows.
///
/// # Errors
/// * [`PrepError::SheetNotFound`] / [`PrepError::ColumnNotFound`] for bad
///   selections
/// * [`PrepError::EmptySelection`] when no valid rows remain after filtering
/// * [`PrepError::NonPositiveValue`] when the filtered range contains a zero
///   or negative value; the transform is undefined there and the data is
///   never shifted or coerced
pub fn run(workbook: &Workbook, request: &TransformRequest) -> Result<TransformOutput> {
    let sheet = workbook.sheet(&request.sheet)?;

    let in_range = date_range_indices(sheet, &request.date_column, request.start, request.end)?;
    let (kept, original) = numeric_values(sheet, &request.value_column, &in_range)?;

    if original.is_empty() {
        return Err(PrepError::EmptySelection);
    }

    let TransformResult { lambda, values } = transform(&original)?;

    let mut table = sheet.select_rows(&kept);
    let column_name = format!("{}{}", request.value_column, BOXCOX_SUFFIX);
    let cells = values.iter().copied().map(CellValue::Number).collect();
    table.push_column(column_name, cells)?;

    Ok(TransformOutput {
        table,
        lambda,
        original,
        transformed: values,
    })
}
