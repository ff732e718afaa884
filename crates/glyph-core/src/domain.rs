//! Numeric domains and tick generation
//!
//! A [`Domain`] is the closed interval every sample value and rendered
//! height is normalized against. Normalization is deliberately unclamped:
//! values outside the domain map outside `[0, 1]`.

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Closed interval `[min, max]` with `min < max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// Create a new domain, rejecting `min >= max` and non-finite bounds
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(Error::invalid_domain(min, max));
        }
        Ok(Self { min, max })
    }

    /// The unit interval `[0, 1]`
    pub fn unit() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    /// Lower bound
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the interval
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map `value` to its fraction of the domain (inverse lerp, unclamped)
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Map a fraction of the domain back to a value (lerp, unclamped)
    pub fn denormalize(&self, fraction: f64) -> f64 {
        self.min + fraction * (self.max - self.min)
    }

    /// Check if a value falls within the closed interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::unit()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// `count` evenly spaced values from `start` to `stop`, both ends included
///
/// Value `i` is `i / (count - 1) * (stop - start) + start`, so the endpoints
/// are reproduced exactly. `count == 1` yields `[start]`, `count == 0` yields
/// nothing. `stop < start` produces a descending sequence.
pub fn ticks_exact(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| (i as f64 / last) * (stop - start) + start)
                .collect()
        }
    }
}
