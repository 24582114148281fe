//! Optimization utilities for parameter estimation.

/// Result of a scalar maximization.
#[derive(Debug, Clone)]
pub struct ScalarSearchResult {
    /// The abscissa of the maximum found.
    pub x: f64,
    /// The objective function value at the maximum.
    pub value: f64,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether the bracket shrank below the tolerance.
    pub converged: bool,
}

/// Configuration for golden-section search.
#[derive(Debug, Clone)]
pub struct GoldenSectionConfig {
    /// Convergence tolerance on the abscissa.
    pub tolerance: f64,
    /// Maximum number of bracket reductions.
    pub max_iter: usize,
}

impl Default for GoldenSectionConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iter: 200,
        }
    }
}

/// Maximize a unimodal function over a bounded interval by golden-section
/// search.
///
/// Derivative-free: only requires function evaluations. Each iteration
/// shrinks the bracket by the golden ratio, so the abscissa converges to
/// tolerance `tol` in O(log((hi - lo) / tol)) evaluations.
///
/// # Arguments
/// * `objective` - The function to maximize
/// * `lo`, `hi` - Bracket endpoints (`lo < hi`)
/// * `config` - Tolerance and iteration cap
///
/// # Example
/// ```
/// use boxcox_prep::utils::optimization::{golden_section_max, GoldenSectionConfig};
///
/// // Maximize -(x - 2)^2 over [0, 5]
/// let result = golden_section_max(|x| -(x - 2.0).powi(2), 0.0, 5.0, GoldenSectionConfig::default());
///
/// assert!(result.converged);
/// assert!((result.x - 2.0).abs() < 1e-6);
/// ```
pub fn golden_section_max<F>(
    objective: F,
    lo: f64,
    hi: f64,
    config: GoldenSectionConfig,
) -> ScalarSearchResult
where
    F: Fn(f64) -> f64,
{
    // 1/phi and 1/phi^2
    let inv_phi = (5.0_f64.sqrt() - 1.0) / 2.0;
    let inv_phi2 = (3.0 - 5.0_f64.sqrt()) / 2.0;

    let mut a = lo;
    let mut b = hi;
    let mut h = b - a;

    if h <= config.tolerance {
        let mid = 0.5 * (a + b);
        return ScalarSearchResult {
            x: mid,
            value: objective(mid),
            iterations: 0,
            converged: true,
        };
    }

    let mut c = a + inv_phi2 * h;
    let mut d = a + inv_phi * h;
    let mut fc = objective(c);
    let mut fd = objective(d);

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        iterations += 1;

        if fc > fd {
            b = d;
            d = c;
            fd = fc;
            h = b - a;
            c = a + inv_phi2 * h;
            fc = objective(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            h = b - a;
            d = a + inv_phi * h;
            fd = objective(d);
        }

        if h < config.tolerance {
            converged = true;
            break;
        }
    }

    let x = if fc > fd { c } else { d };
    ScalarSearchResult {
        x,
        value: fc.max(fd),
        iterations,
        converged,
    }
}
