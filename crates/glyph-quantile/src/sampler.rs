//! Evenly spaced quantile levels for glyph rendering
//!
//! A sampler with resolution `r` evaluates `r + 1` probabilities
//! `p_i = i / r` (so `r = 4` gives min, quartiles and max) against an
//! ascending sample.

use crate::estimators::LinearInterpolation;
use crate::traits::QuantileEstimator;
use glyph_core::{ticks_exact, Error, Result};
use tracing::trace;

/// Produces `resolution + 1` quantile values from an ascending sample
#[derive(Debug, Clone)]
pub struct QuantileSampler<E: QuantileEstimator = LinearInterpolation> {
    resolution: usize,
    estimator: E,
}

impl QuantileSampler<LinearInterpolation> {
    /// Create a sampler using linear interpolation
    pub fn new(resolution: usize) -> Result<Self> {
        Self::with_estimator(resolution, LinearInterpolation)
    }
}

impl<E: QuantileEstimator> QuantileSampler<E> {
    /// Create a sampler with a custom estimator
    pub fn with_estimator(resolution: usize, estimator: E) -> Result<Self> {
        if resolution == 0 {
            return Err(Error::zero_resolution());
        }
        Ok(Self {
            resolution,
            estimator,
        })
    }

    /// Number of segments between the sampled levels
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// The underlying estimator
    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// The `resolution + 1` probabilities, ascending from 0 to 1 inclusive
    pub fn probabilities(&self) -> Vec<f64> {
        ticks_exact(0.0, 1.0, self.resolution + 1)
    }

    /// Sample the quantile levels of an ascending sample
    pub fn sample(&self, sorted_sample: &[f64]) -> Result<Vec<f64>> {
        if sorted_sample.is_empty() {
            return Err(Error::empty_input("quantile sampling"));
        }
        let levels = self
            .estimator
            .quantiles_sorted(sorted_sample, &self.probabilities())?;
        trace!(
            estimator = self.estimator.name(),
            n = sorted_sample.len(),
            ?levels,
            "sampled quantile levels"
        );
        Ok(levels)
    }
}

/// Quantiles of an ascending sample at `resolution + 1` evenly spaced probabilities
///
/// ```rust
/// let sample: Vec<f64> = (1..=100).map(f64::from).collect();
/// let q = glyph_quantile::quantiles(&sample, 4).unwrap();
/// assert_eq!(q, vec![1.0, 25.75, 50.5, 75.25, 100.0]);
/// ```
pub fn quantiles(sorted_sample: &[f64], resolution: usize) -> Result<Vec<f64>> {
    QuantileSampler::new(resolution)?.sample(sorted_sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probabilities() {
        let sampler = QuantileSampler::new(4).unwrap();
        assert_eq!(sampler.probabilities(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(QuantileSampler::new(1).unwrap().probabilities(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_one_to_hundred() {
        let sample: Vec<f64> = (1..=100).map(f64::from).collect();
        assert_eq!(
            quantiles(&sample, 4).unwrap(),
            vec![1.0, 25.75, 50.5, 75.25, 100.0]
        );
    }

    #[test]
    fn test_resolution_one_is_min_max() {
        let sample = [2.0, 3.0, 5.0, 8.0, 13.0];
        assert_eq!(quantiles(&sample, 1).unwrap(), vec![2.0, 13.0]);
    }

    #[test]
    fn test_constant_sample() {
        let zeros = vec![0.0; 50];
        assert_eq!(quantiles(&zeros, 4).unwrap(), vec![0.0; 5]);
        assert_eq!(quantiles(&[7.5], 3).unwrap(), vec![7.5; 4]);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            QuantileSampler::new(0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(quantiles(&[], 4), Err(Error::InvalidArgument(_))));
    }
}
