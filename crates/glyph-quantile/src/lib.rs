//! Quantile sampling for bucket glyphs
//!
//! This crate turns an ascending numeric sample into the ordered quantile
//! levels a bucket glyph stacks its liquid segments on.
//!
//! # Example
//!
//! ```rust
//! use glyph_quantile::{QuantileEstimator, QuantileSampler, linear_interpolation};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! // Single quantile
//! let median = linear_interpolation().quantile_sorted(&sample, 0.5).unwrap();
//! assert_eq!(median, 3.0);
//!
//! // Min, quartiles and max
//! let sampler = QuantileSampler::new(4).unwrap();
//! let levels = sampler.sample(&sample).unwrap();
//! assert_eq!(levels, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! ```

pub mod estimators;
pub mod sampler;
pub mod traits;

// Re-export main types
pub use estimators::{linear_interpolation, LinearInterpolation};
pub use glyph_core::{Error, Result};
pub use sampler::{quantiles, QuantileSampler};
pub use traits::QuantileEstimator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{quantiles, Error, LinearInterpolation, QuantileEstimator, QuantileSampler, Result};
}
