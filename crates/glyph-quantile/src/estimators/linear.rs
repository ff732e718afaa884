//! Linear-interpolation quantile estimator
//!
//! For `n` ascending observations and probability `p`, let
//! `h = p * (n - 1)`, `lo = floor(h)` and `frac = h - lo`. The estimate is
//! `x[lo] + frac * (x[min(lo + 1, n - 1)] - x[lo])`. This is the estimator
//! most plotting libraries use (Hyndman & Fan type 7).

use crate::traits::{check_probability, QuantileEstimator};
use glyph_core::{Error, Result};

/// Linear interpolation between adjacent order statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

/// Convenience constructor for the linear-interpolation estimator
pub fn linear_interpolation() -> LinearInterpolation {
    LinearInterpolation
}

impl QuantileEstimator for LinearInterpolation {
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        if sorted_data.is_empty() {
            return Err(Error::empty_input("linear quantile"));
        }
        check_probability(p)?;

        let last = sorted_data.len() - 1;
        let h = p * last as f64;
        // p == 1 lands exactly on `last`; min() only guards rounding
        let lo = (h.floor() as usize).min(last);
        let frac = h - lo as f64;
        let hi = (lo + 1).min(last);

        Ok(sorted_data[lo] + frac * (sorted_data[hi] - sorted_data[lo]))
    }

    fn name(&self) -> &str {
        "Linear interpolation"
    }
}
