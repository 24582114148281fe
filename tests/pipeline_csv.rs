//! End-to-end tests: workbook in, filtered Box-Cox table out, CSV bytes.

use boxcox_prep::export::to_csv_bytes;
use boxcox_prep::pipeline::{run, TransformRequest};
use boxcox_prep::table::{CellValue, Table, Workbook};
use boxcox_prep::PrepError;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A sheet with ten daily rows, one missing value, and one unparseable date.
fn sample_workbook() -> Workbook {
    let mut rows: Vec<Vec<CellValue>> = (1..=10)
        .map(|d| {
            vec![
                CellValue::Text(format!("2023-01-{:02}", d)),
                CellValue::Number(d as f64 * d as f64),
            ]
        })
        .collect();
    rows[6][1] = CellValue::Empty; // 2023-01-07 missing
    rows.push(vec![
        CellValue::Text("not a date".into()),
        CellValue::Number(999.0),
    ]);

    Workbook::from_sheets(vec![Table::new(
        "measurements",
        vec!["date".into(), "reading".into()],
        rows,
    )])
}

fn full_range_request() -> TransformRequest {
    TransformRequest {
        sheet: "measurements".into(),
        date_column: "date".into(),
        value_column: "reading".into(),
        start: date(2023, 1, 1),
        end: date(2023, 1, 10),
    }
}

#[test]
fn full_pipeline_produces_augmented_table() {
    let wb = sample_workbook();
    let out = run(&wb, &full_range_request()).unwrap();

    // 10 dated rows, minus the missing value; the unparseable-date row is
    // dropped silently
    assert_eq!(out.table.n_rows(), 9);
    assert_eq!(out.original.len(), 9);
    assert_eq!(out.transformed.len(), 9);
    assert!((-2.0..=2.0).contains(&out.lambda));
    assert_eq!(
        out.table.column_names(),
        &["date", "reading", "reading_boxcox"]
    );
}

#[test]
fn narrowed_date_range_is_inclusive() {
    let wb = sample_workbook();
    let mut req = full_range_request();
    req.start = date(2023, 1, 3);
    req.end = date(2023, 1, 5);

    let out = run(&wb, &req).unwrap();
    assert_eq!(out.original, vec![9.0, 16.0, 25.0]);
}

#[test]
fn exported_csv_has_bom_header_and_data_lines() {
    let wb = sample_workbook();
    let mut req = full_range_request();
    req.start = date(2023, 1, 1);
    req.end = date(2023, 1, 5);

    let out = run(&wb, &req).unwrap();
    let bytes = to_csv_bytes(&out.table).unwrap();

    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);

    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    // Header plus 5 data rows
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "date,reading,reading_boxcox");
    assert!(lines[1].starts_with("2023-01-01,1,"));
}

#[test]
fn transform_output_is_independent_per_run() {
    let wb = sample_workbook();
    let req = full_range_request();

    let a = run(&wb, &req).unwrap();
    let b = run(&wb, &req).unwrap();

    // Pure function of the input: repeated runs agree
    assert_eq!(a.lambda, b.lambda);
    assert_eq!(a.transformed, b.transformed);
}

#[test]
fn zero_in_range_fails_but_narrower_range_succeeds() {
    let mut rows: Vec<Vec<CellValue>> = (1..=5)
        .map(|d| {
            vec![
                CellValue::Text(format!("2023-02-{:02}", d)),
                CellValue::Number(d as f64),
            ]
        })
        .collect();
    rows[0][1] = CellValue::Number(0.0);
    let wb = Workbook::from_sheets(vec![Table::new(
        "s",
        vec!["date".into(), "v".into()],
        rows,
    )]);

    let mut req = TransformRequest {
        sheet: "s".into(),
        date_column: "date".into(),
        value_column: "v".into(),
        start: date(2023, 2, 1),
        end: date(2023, 2, 5),
    };
    assert!(matches!(
        run(&wb, &req).unwrap_err(),
        PrepError::NonPositiveValue { .. }
    ));

    // Excluding the zero-valued day makes the transform valid
    req.start = date(2023, 2, 2);
    assert!(run(&wb, &req).is_ok());
}
