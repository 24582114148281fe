//! Box-Cox power transformation.
//!
//! Transforms strictly positive data to be more normally distributed. The
//! shape parameter lambda is chosen by maximizing the profile log-likelihood
//! of the transformed data under a normality assumption, searched over
//! [-2, 2] by golden-section.

use crate::error::{PrepError, Result};
use crate::utils::optimization::{golden_section_max, GoldenSectionConfig};
use crate::utils::stats::variance_mle;

/// Lower bound of the lambda search interval.
pub const LAMBDA_MIN: f64 = -2.0;
/// Upper bound of the lambda search interval.
pub const LAMBDA_MAX: f64 = 2.0;

/// Lambdas closer to zero than this are treated as the log transform.
const LAMBDA_ZERO_EPS: f64 = 1e-10;

/// Result of a Box-Cox transformation.
///
/// Immutable once returned; same length and order as the input series.
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// Lambda parameter used.
    pub lambda: f64,
    /// Transformed data, positionally aligned with the input.
    pub values: Vec<f64>,
}

impl TransformResult {
    /// Inverse transform to recover the original scale.
    pub fn inverse(&self) -> Vec<f64> {
        inv_boxcox(&self.values, self.lambda)
    }
}

/// Apply the Box-Cox transformation with automatic lambda selection.
///
/// Finds the maximum-likelihood lambda over [`LAMBDA_MIN`, `LAMBDA_MAX`],
/// then transforms every input value at that lambda. Pure function of its
/// input; each call returns a fresh [`TransformResult`].
///
/// # Errors
/// * [`PrepError::EmptyData`] if `series` is empty
/// * [`PrepError::NonPositiveValue`] if any element is zero or negative
/// * [`PrepError::NonFiniteValue`] if any element is NaN or infinite
pub fn transform(series: &[f64]) -> Result<TransformResult> {
    validate_positive(series)?;
    let lambda = optimal_lambda(series);
    let values = apply(series, lambda);
    Ok(TransformResult { lambda, values })
}

/// Apply the Box-Cox transformation with a given lambda.
///
/// For lambda != 0: `y = (x^lambda - 1) / lambda`
/// For lambda == 0: `y = ln(x)`
///
/// # Errors
/// Rejects empty, non-positive, or non-finite input; never coerces an
/// undefined transform to NaN.
pub fn boxcox(series: &[f64], lambda: f64) -> Result<Vec<f64>> {
    validate_positive(series)?;
    Ok(apply(series, lambda))
}

/// Inverse Box-Cox transformation.
///
/// For lambda != 0: `x = (lambda * y + 1)^(1/lambda)`
/// For lambda == 0: `x = exp(y)`
///
/// Transformed values outside the image of the forward transform (where
/// `lambda * y + 1 <= 0`) map to NaN.
pub fn inv_boxcox(transformed: &[f64], lambda: f64) -> Vec<f64> {
    transformed
        .iter()
        .map(|&y| {
            if lambda.abs() < LAMBDA_ZERO_EPS {
                y.exp()
            } else {
                let val = lambda * y + 1.0;
                if val <= 0.0 {
                    f64::NAN
                } else {
                    val.powf(1.0 / lambda)
                }
            }
        })
        .collect()
}

/// Find the optimal Box-Cox lambda by maximum likelihood estimation.
///
/// Golden-section search of the profile log-likelihood over
/// [`LAMBDA_MIN`, `LAMBDA_MAX`] to 1e-8 tolerance on lambda. The
/// log-likelihood is unimodal in lambda for positive data, so the search
/// converges to the global maximizer within the bracket.
///
/// # Errors
/// Same validation as [`transform`].
pub fn boxcox_lambda(series: &[f64]) -> Result<f64> {
    validate_positive(series)?;
    Ok(optimal_lambda(series))
}

/// Compute the Box-Cox profile log-likelihood at a given lambda.
///
/// `llf = -n/2 * ln(variance_mle(y)) + (lambda - 1) * sum(ln(x))`
///
/// where `y` is the transformed series and the variance is the biased
/// divide-by-n estimate. Constant terms are dropped. Degenerate inputs
/// (fewer than two points, zero variance) evaluate to negative infinity so
/// the search never selects them.
pub fn boxcox_llf(series: &[f64], lambda: f64) -> f64 {
    let n = series.len();
    if n < 2 {
        return f64::NEG_INFINITY;
    }

    let transformed = apply(series, lambda);
    let variance = variance_mle(&transformed);
    if !variance.is_finite() || variance <= 0.0 {
        return f64::NEG_INFINITY;
    }

    let log_sum: f64 = series.iter().map(|x| x.ln()).sum();
    -0.5 * n as f64 * variance.ln() + (lambda - 1.0) * log_sum
}

fn optimal_lambda(series: &[f64]) -> f64 {
    let result = golden_section_max(
        |lambda| boxcox_llf(series, lambda),
        LAMBDA_MIN,
        LAMBDA_MAX,
        GoldenSectionConfig::default(),
    );
    result.x
}

fn apply(series: &[f64], lambda: f64) -> Vec<f64> {
    series
        .iter()
        .map(|&x| {
            if lambda.abs() < LAMBDA_ZERO_EPS {
                x.ln()
            } else {
                (x.powf(lambda) - 1.0) / lambda
            }
        })
        .collect()
}

fn validate_positive(series: &[f64]) -> Result<()> {
    if series.is_empty() {
        return Err(PrepError::EmptyData);
    }
    for (index, &x) in series.iter().enumerate() {
        if !x.is_finite() {
            return Err(PrepError::NonFiniteValue { index });
        }
        if x <= 0.0 {
            return Err(PrepError::NonPositiveValue { index, value: x });
        }
    }
    Ok(())
}
