//! Auto-binned histograms for before/after distribution previews.
//!
//! Presentation data only: bin edges and counts, no rendering. Bin count
//! follows the "auto" rule familiar from numpy, the larger of the Sturges
//! and Freedman-Diaconis estimates.

use crate::utils::stats::iqr;

/// A binned view of a value distribution.
///
/// `edges` has one more entry than `counts`; bin `i` covers
/// `[edges[i], edges[i + 1])`, with the last bin closed on the right.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Bin boundaries, ascending.
    pub edges: Vec<f64>,
    /// Observations per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Width of each (uniform) bin. NaN for an empty histogram.
    pub fn bin_width(&self) -> f64 {
        if self.edges.len() < 2 {
            return f64::NAN;
        }
        self.edges[1] - self.edges[0]
    }

    /// Total number of binned observations.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin a series with an automatically chosen bin count.
pub fn histogram_auto(series: &[f64]) -> Histogram {
    histogram(series, auto_bin_count(series))
}

/// Bin a series into `n_bins` uniform bins spanning its range.
pub fn histogram(series: &[f64], n_bins: usize) -> Histogram {
    if series.is_empty() || n_bins == 0 {
        return Histogram {
            edges: Vec::new(),
            counts: Vec::new(),
        };
    }

    let min_val = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Constant series: one bin of unit width centered on the value
    if (max_val - min_val).abs() < 1e-12 {
        return Histogram {
            edges: vec![min_val - 0.5, min_val + 0.5],
            counts: vec![series.len()],
        };
    }

    let width = (max_val - min_val) / n_bins as f64;
    let edges: Vec<f64> = (0..=n_bins).map(|i| min_val + width * i as f64).collect();

    let mut counts = vec![0usize; n_bins];
    for &x in series {
        let bin = ((x - min_val) / width) as usize;
        // x == max_val lands past the last bin
        counts[bin.min(n_bins - 1)] += 1;
    }

    Histogram { edges, counts }
}

/// Histograms of the original and transformed series, for side-by-side
/// comparison.
pub fn compare(original: &[f64], transformed: &[f64]) -> (Histogram, Histogram) {
    (histogram_auto(original), histogram_auto(transformed))
}

/// Bin count per the "auto" rule: max(Sturges, Freedman-Diaconis).
fn auto_bin_count(series: &[f64]) -> usize {
    let n = series.len();
    if n == 0 {
        return 0;
    }

    let sturges = (n as f64).log2().ceil() as usize + 1;

    let min_val = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max_val - min_val;
    let spread = iqr(series);

    let fd = if spread > 1e-12 && range > 1e-12 {
        let h = 2.0 * spread / (n as f64).cbrt();
        (range / h).ceil() as usize
    } else {
        0
    };

    sturges.max(fd).max(1)
}
