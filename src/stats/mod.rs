//! Descriptive statistics for the diagnostic pipeline.
//!
//! # Mathematical Background
//!
//! ## Point-biserial correlation
//!
//! Pearson correlation where one variable is binary:
//!
//! ```text
//! r_pb(X, Y) = Cov(X, Y) / (σ_X σ_Y)
//! ```
//!
//! Used as the item discrimination index: X is the 0/1 item column and Y
//! the criterion score (here, the total with the item's own contribution
//! removed to avoid part-whole inflation).
//!
//! The classical formula is undefined when either side has zero variance.
//! For diagnostics that case is degenerate-but-valid data (every student
//! scored the same), so [`point_biserial`] is total and returns exactly
//! 0.0 there instead of NaN.

use crate::primitives::Vector;

/// Computes the point-biserial correlation between a binary item column
/// and a continuous criterion score.
///
/// Returns a value in [-1, 1], or exactly 0.0 when either input has
/// (near-)zero variance or is empty.
///
/// # Examples
///
/// ```
/// use evaluar::stats::point_biserial;
/// use evaluar::primitives::Vector;
///
/// let item = Vector::from_slice(&[1.0, 1.0, 0.0, 0.0]);
/// let criterion = Vector::from_slice(&[3.0, 2.5, 1.0, 0.5]);
/// let r = point_biserial(&item, &criterion);
/// assert!(r > 0.9); // High scorers got the item right
/// ```
///
/// # Panics
///
/// Panics if the vectors have different lengths.
#[must_use]
pub fn point_biserial(item: &Vector<f32>, criterion: &Vector<f32>) -> f32 {
    assert_eq!(
        item.len(),
        criterion.len(),
        "Vectors must have same length"
    );

    let n = item.len();
    if n == 0 {
        return 0.0;
    }

    let x_mean = item.mean();
    let y_mean = criterion.mean();

    let mut cov_sum = 0.0;
    let mut x_var_sum = 0.0;
    let mut y_var_sum = 0.0;

    for (&xi, &yi) in item.iter().zip(criterion.iter()) {
        let x_diff = xi - x_mean;
        let y_diff = yi - y_mean;
        cov_sum += x_diff * y_diff;
        x_var_sum += x_diff * x_diff;
        y_var_sum += y_diff * y_diff;
    }

    let x_std = (x_var_sum / n as f32).sqrt();
    let y_std = (y_var_sum / n as f32).sqrt();

    if x_std < 1e-10 || y_std < 1e-10 {
        return 0.0;
    }

    let covariance = cov_sum / n as f32;
    covariance / (x_std * y_std)
}

/// Sample standard deviation (n − 1 denominator).
///
/// Returns 0.0 for fewer than two values, where the estimator is
/// undefined.
#[must_use]
pub fn sample_std(values: &Vector<f32>) -> f32 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let mean = values.mean();
    let ss: f32 = values.iter().map(|&v| (v - mean) * (v - mean)).sum();
    (ss / (n - 1) as f32).sqrt()
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_pointbiserial_contract.rs"]
mod contract_tests;
