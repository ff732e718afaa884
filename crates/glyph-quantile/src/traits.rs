//! Core traits for quantile estimation

use glyph_core::{Error, Result};

/// Main trait for quantile estimation
///
/// # API Convention
///
/// - Methods without suffix sort data in place (take `&mut [f64]`)
/// - Methods with `_sorted` suffix require ascending data (take `&[f64]`).
///   Ordering is the caller's responsibility and is not re-validated: an
///   unsorted sample yields a wrong but well-defined result.
pub trait QuantileEstimator {
    /// Estimate a single quantile from ascending data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, already sorted ascending
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate multiple quantiles from ascending data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }

    /// Estimate a single quantile
    ///
    /// # Warning
    /// This method will sort the data in place! If you need to preserve the original
    /// order, use `quantile_sorted()` with pre-sorted data or make a copy first.
    fn quantile(&self, data: &mut [f64], p: f64) -> Result<f64> {
        data.sort_by(f64::total_cmp);
        self.quantile_sorted(data, p)
    }

    /// Estimate multiple quantiles, sorting `data` in place first
    fn quantiles(&self, data: &mut [f64], ps: &[f64]) -> Result<Vec<f64>> {
        data.sort_by(f64::total_cmp);
        self.quantiles_sorted(data, ps)
    }

    /// Human-readable name of the estimator
    fn name(&self) -> &str;
}

/// Check that a probability lies in `[0, 1]`
pub fn check_probability(p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidArgument(format!(
            "quantile probability {p} must be in [0, 1]"
        )));
    }
    Ok(())
}
