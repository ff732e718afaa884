//! Core types for histogram representation

use glyph_core::Domain;
use serde::Serialize;
use std::fmt;

/// A single cell of a fixed-width partition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
}

impl NumericBin {
    /// Create a new bin
    pub fn new(left: f64, right: f64, count: usize) -> Self {
        Self { left, right, count }
    }

    /// Create a bin from a raw count alone (edges at zero)
    pub fn with_count(count: usize) -> Self {
        Self::new(0.0, 0.0, count)
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

impl fmt::Display for NumericBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}): count={}", self.left, self.right, self.count)
    }
}

/// A fixed-width partition of a domain with per-bin counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    bins: Vec<NumericBin>,
    /// Values that landed in some bin
    total_count: usize,
    domain: Domain,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<NumericBin>, total_count: usize, domain: Domain) -> Self {
        Self {
            bins,
            total_count,
            domain,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[NumericBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the number of binned values
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// The partitioned domain
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, domain={})",
            self.len(),
            self.total_count,
            self.domain
        )
    }
}
