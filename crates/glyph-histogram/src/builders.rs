//! Fixed-width partition of a domain

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, NumericBin};
use glyph_core::{Domain, Result};

/// Fixed-width histogram builder
///
/// Partitions a [`Domain`] into `num_bins` equal-width half-open bins, the
/// last one closed on the right so the domain maximum is counted. Values
/// outside the domain (and NaN) are not counted anywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthBuilder {
    num_bins: usize,
    domain: Domain,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize, domain: Domain) -> Self {
        Self {
            num_bins: num_bins.max(1),
            domain,
        }
    }

    /// The partitioned domain
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Empty bins covering the domain
    fn empty_bins(&self) -> Vec<NumericBin> {
        let min = self.domain.min();
        let width = self.domain.span() / self.num_bins as f64;

        (0..self.num_bins)
            .map(|i| {
                let left = min + i as f64 * width;
                let right = if i == self.num_bins - 1 {
                    self.domain.max() // Ensure last bin includes max
                } else {
                    min + (i + 1) as f64 * width
                };
                NumericBin::new(left, right, 0)
            })
            .collect()
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.build_sorted(&sorted)
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        let mut bins = self.empty_bins();
        let last = bins.len() - 1;
        let mut total = 0;

        // Single pass through sorted data
        let mut current_bin = 0;
        for &value in sorted_sample {
            if !self.domain.contains(value) {
                continue;
            }
            while current_bin < last && value >= bins[current_bin].right {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
            total += 1;
        }

        Ok(Histogram::new(bins, total, self.domain))
    }
}
