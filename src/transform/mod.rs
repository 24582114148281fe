//! Box-Cox transformation of value series.
//!
//! # Example
//!
//! ```
//! use boxcox_prep::transform::transform;
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 100.0];
//! let result = transform(&series).unwrap();
//!
//! assert_eq!(result.values.len(), series.len());
//! assert!((-2.0..=2.0).contains(&result.lambda));
//! ```

pub mod boxcox;

pub use boxcox::{
    boxcox, boxcox_lambda, boxcox_llf, inv_boxcox, transform, TransformResult, LAMBDA_MAX,
    LAMBDA_MIN,
};
