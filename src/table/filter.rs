//! Row selection: date-range filtering and missing-value removal.
//!
//! Dates come out of spreadsheets either as native date/time cells or as
//! text in a handful of common layouts. Rows whose date cell cannot be
//! parsed are treated as missing and dropped, never reported as errors.

use chrono::{Days, NaiveDate, NaiveDateTime};

use super::{CellValue, Table};
use crate::error::{PrepError, Result};

const TEXT_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

const TEXT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Parse a cell as a date/time, if possible.
///
/// Accepts native [`CellValue::DateTime`] cells and text in ISO and common
/// slash/dot layouts. Date-only values resolve to midnight.
pub fn parse_cell_date(cell: &CellValue) -> Option<NaiveDateTime> {
    match cell {
        CellValue::DateTime(dt) => Some(*dt),
        CellValue::Text(s) => parse_text_date(s.trim()),
        _ => None,
    }
}

fn parse_text_date(s: &str) -> Option<NaiveDateTime> {
    for fmt in TEXT_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in TEXT_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Indices of rows whose date column falls within `[start, end]`, end date
/// inclusive of the entire day.
///
/// Implemented as `start_midnight <= t < (end + 1 day)_midnight`, so a row
/// timestamped anywhere on the end date is retained. Rows with missing or
/// unparseable dates are skipped. Original row order is preserved.
pub fn date_range_indices(
    table: &Table,
    date_column: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<usize>> {
    let col = table.column_index(date_column)?;

    let start_dt = start
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| PrepError::Spreadsheet("invalid start date".to_string()))?;
    let end_exclusive = end
        .checked_add_days(Days::new(1))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| PrepError::Spreadsheet("invalid end date".to_string()))?;

    let indices = table
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let t = parse_cell_date(&row[col])?;
            (t >= start_dt && t < end_exclusive).then_some(i)
        })
        .collect();

    Ok(indices)
}

/// Extract the numeric values of a column for the given rows, dropping rows
/// whose value cell is missing.
///
/// Returns the retained row indices alongside the value series; the two are
/// positionally aligned. A non-empty, non-numeric cell in the selection is a
/// [`PrepError::NotNumericColumn`] error rather than a silent drop.
pub fn numeric_values(
    table: &Table,
    value_column: &str,
    indices: &[usize],
) -> Result<(Vec<usize>, Vec<f64>)> {
    let col = table.column_index(value_column)?;

    let mut kept = Vec::with_capacity(indices.len());
    let mut values = Vec::with_capacity(indices.len());
    for &i in indices {
        match &table.rows()[i][col] {
            CellValue::Number(v) => {
                kept.push(i);
                values.push(*v);
            }
            CellValue::Empty => {}
            _ => return Err(PrepError::NotNumericColumn(value_column.to_string())),
        }
    }

    Ok((kept, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily_table() -> Table {
        // Rows dated 2023-01-01 through 2023-01-10
        let rows = (1..=10)
            .map(|d| {
                vec![
                    CellValue::Text(format!("2023-01-{:02}", d)),
                    CellValue::Number(d as f64),
                ]
            })
            .collect();
        Table::new("daily", vec!["date".into(), "value".into()], rows)
    }

    #[test]
    fn parses_native_and_text_dates() {
        let dt = date(2023, 5, 17).and_hms_opt(13, 45, 0).unwrap();
        assert_eq!(parse_cell_date(&CellValue::DateTime(dt)), Some(dt));

        let parsed = parse_cell_date(&CellValue::Text("2023-05-17".into())).unwrap();
        assert_eq!(parsed.date(), date(2023, 5, 17));
        assert_eq!(parsed.time().format("%H:%M:%S").to_string(), "00:00:00");

        let parsed = parse_cell_date(&CellValue::Text("2023/05/17 08:30:00".into())).unwrap();
        assert_eq!(parsed.time().format("%H:%M").to_string(), "08:30");
    }

    #[test]
    fn unparseable_dates_are_none() {
        assert_eq!(parse_cell_date(&CellValue::Text("not a date".into())), None);
        assert_eq!(parse_cell_date(&CellValue::Number(44000.0)), None);
        assert_eq!(parse_cell_date(&CellValue::Empty), None);
    }

    #[test]
    fn range_is_inclusive_of_both_endpoints() {
        let table = daily_table();
        let indices =
            date_range_indices(&table, "date", date(2023, 1, 3), date(2023, 1, 5)).unwrap();

        // Exactly rows for 01-03, 01-04, 01-05
        assert_eq!(indices, vec![2, 3, 4]);
    }

    #[test]
    fn end_date_covers_the_entire_day() {
        let late = date(2023, 1, 5).and_hms_opt(23, 59, 59).unwrap();
        let next = date(2023, 1, 6).and_hms_opt(0, 0, 0).unwrap();
        let table = Table::new(
            "t",
            vec!["date".into(), "value".into()],
            vec![
                vec![CellValue::DateTime(late), CellValue::Number(1.0)],
                vec![CellValue::DateTime(next), CellValue::Number(2.0)],
            ],
        );

        let indices =
            date_range_indices(&table, "date", date(2023, 1, 1), date(2023, 1, 5)).unwrap();
        assert_eq!(indices, vec![0]);
    }

    #[test]
    fn unparseable_date_rows_are_dropped_not_fatal() {
        let table = Table::new(
            "t",
            vec!["date".into(), "value".into()],
            vec![
                vec![
                    CellValue::Text("2023-01-02".into()),
                    CellValue::Number(1.0),
                ],
                vec![CellValue::Text("garbage".into()), CellValue::Number(2.0)],
                vec![
                    CellValue::Text("2023-01-03".into()),
                    CellValue::Number(3.0),
                ],
            ],
        );

        let indices =
            date_range_indices(&table, "date", date(2023, 1, 1), date(2023, 1, 31)).unwrap();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn missing_date_column_is_an_error() {
        let table = daily_table();
        assert!(matches!(
            date_range_indices(&table, "when", date(2023, 1, 1), date(2023, 1, 2)).unwrap_err(),
            PrepError::ColumnNotFound(_)
        ));
    }

    #[test]
    fn numeric_values_drop_missing() {
        let table = Table::new(
            "t",
            vec!["date".into(), "value".into()],
            vec![
                vec![
                    CellValue::Text("2023-01-01".into()),
                    CellValue::Number(1.0),
                ],
                vec![CellValue::Text("2023-01-02".into()), CellValue::Empty],
                vec![
                    CellValue::Text("2023-01-03".into()),
                    CellValue::Number(3.0),
                ],
            ],
        );

        let (kept, values) = numeric_values(&table, "value", &[0, 1, 2]).unwrap();
        assert_eq!(kept, vec![0, 2]);
        assert_eq!(values, vec![1.0, 3.0]);
    }

    #[test]
    fn text_in_value_column_is_rejected() {
        let table = Table::new(
            "t",
            vec!["value".into()],
            vec![vec![CellValue::Text("n/a".into())]],
        );

        assert!(matches!(
            numeric_values(&table, "value", &[0]).unwrap_err(),
            PrepError::NotNumericColumn(_)
        ));
    }
}
