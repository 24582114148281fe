//! Utility functions shared across the library.

pub mod optimization;
pub mod stats;

pub use optimization::{golden_section_max, GoldenSectionConfig, ScalarSearchResult};
pub use stats::{iqr, mean, quantile, variance_mle};
