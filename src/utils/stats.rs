//! Statistical utility functions.

/// Arithmetic mean. Returns NaN for empty input.
pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Biased (population, divide-by-n) sample variance.
///
/// This is the maximum-likelihood variance estimate that the Box-Cox
/// log-likelihood is defined in terms of, not the n-1 Bessel-corrected
/// estimator.
pub fn variance_mle(series: &[f64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    let m = mean(series);
    series.iter().map(|x| (x - m).powi(2)).sum::<f64>() / series.len() as f64
}

/// Returns the value at the given quantile using linear interpolation.
///
/// # Arguments
/// * `series` - Input data
/// * `q` - Quantile (0.0 to 1.0)
pub fn quantile(series: &[f64], q: f64) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    let q = q.clamp(0.0, 1.0);
    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let pos = q * (n - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;

    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// Interquartile range (Q3 - Q1).
pub fn iqr(series: &[f64]) -> f64 {
    quantile(series, 0.75) - quantile(series, 0.25)
}
