//! # boxcox-prep
//!
//! Box-Cox normalization of spreadsheet columns.
//!
//! Loads an Excel workbook, selects a sheet, a date column, and a numeric
//! value column, restricts rows to an inclusive date range, finds the
//! maximum-likelihood Box-Cox lambda over [-2, 2], and merges the
//! transformed values back as a `<column>_boxcox` column ready for CSV
//! export (UTF-8 with BOM).
//!
//! ```
//! use boxcox_prep::prelude::*;
//! use boxcox_prep::table::{CellValue, Table};
//! use chrono::NaiveDate;
//!
//! let rows = (1..=5)
//!     .map(|d| {
//!         vec![
//!             CellValue::Text(format!("2023-01-{:02}", d)),
//!             CellValue::Number(d as f64),
//!         ]
//!     })
//!     .collect();
//! let sheet = Table::new("data", vec!["date".into(), "amount".into()], rows);
//! let workbook = Workbook::from_sheets(vec![sheet]);
//!
//! let request = TransformRequest {
//!     sheet: "data".into(),
//!     date_column: "date".into(),
//!     value_column: "amount".into(),
//!     start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
//!     end: NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
//! };
//!
//! let output = boxcox_prep::pipeline::run(&workbook, &request).unwrap();
//! assert!((-2.0..=2.0).contains(&output.lambda));
//! ```

pub mod distribution;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod table;
pub mod transform;
pub mod utils;

pub use error::{PrepError, Result};

pub mod prelude {
    pub use crate::error::{PrepError, Result};
    pub use crate::export::{to_csv_bytes, write_csv_file};
    pub use crate::pipeline::{run, TransformOutput, TransformRequest};
    pub use crate::table::Workbook;
    pub use crate::transform::{transform, TransformResult};
}
