//! Quantile dot-histogram layout
//!
//! A quantile dot-histogram draws a fixed number of icons, each standing
//! for `n / icons` samples. Samples are partitioned into fixed-width bins,
//! the icon budget is apportioned across the bins, and each bin's icons are
//! stacked from the baseline outwards.

use crate::builders::FixedWidthBuilder;
use crate::distributor::BinDistributor;
use crate::traits::HistogramBuilder;
use crate::types::Histogram;
use glyph_core::{Domain, Result};
use serde::Serialize;
use tracing::{debug, instrument};

/// Where one icon goes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IconPlacement {
    /// Index of the bin the icon belongs to
    pub bin: usize,
    /// Center of that bin, in domain units
    pub value: f64,
    /// 0-based position in the bin's stack
    pub stack: usize,
    /// Stack position in sample units: `(stack + 0.5) * units_per_icon`
    pub position: f64,
}

/// Result of laying out a dot-histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DotLayout {
    /// The partition the icons were apportioned over
    pub histogram: Histogram,
    /// Icons per bin, summing to the budget
    pub counts: Vec<usize>,
    /// Samples represented by one icon
    pub units_per_icon: f64,
    /// One entry per icon, ordered by bin then stack
    pub icons: Vec<IconPlacement>,
}

/// Lays out a fixed icon budget over a fixed-width partition of a domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotHistogram {
    builder: FixedWidthBuilder,
    icons: usize,
}

impl DotHistogram {
    /// Create a layout with `bins` bins over `domain` and `icons` icons in total
    pub fn new(domain: Domain, bins: usize, icons: usize) -> Self {
        Self {
            builder: FixedWidthBuilder::new(bins, domain),
            icons,
        }
    }

    /// Total icon budget
    pub fn icons(&self) -> usize {
        self.icons
    }

    /// Lay out icons for `sample` (any order)
    ///
    /// An empty sample or a zero budget produces no icons. A non-empty
    /// sample with no values inside the domain cannot hold a positive budget
    /// and fails with [`glyph_core::Error::Unsatisfiable`].
    #[instrument(level = "debug", skip_all, fields(n = sample.len(), icons = self.icons))]
    pub fn layout(&self, sample: &[f64]) -> Result<DotLayout> {
        let histogram = self.builder.build(sample)?;

        if sample.is_empty() || self.icons == 0 {
            return Ok(DotLayout {
                counts: vec![0; histogram.len()],
                histogram,
                units_per_icon: 0.0,
                icons: Vec::new(),
            });
        }

        let units_per_icon = sample.len() as f64 / self.icons as f64;
        let counts = BinDistributor::new(units_per_icon)?
            .distribute_counts(&histogram.counts(), self.icons)?;

        let icons: Vec<IconPlacement> = histogram
            .bins()
            .iter()
            .zip(&counts)
            .enumerate()
            .flat_map(|(bin, (numeric_bin, &count))| {
                (0..count).map(move |stack| IconPlacement {
                    bin,
                    value: numeric_bin.center(),
                    stack,
                    position: (stack as f64 + 0.5) * units_per_icon,
                })
            })
            .collect();
        debug!(placed = icons.len(), units_per_icon, "dot histogram laid out");

        Ok(DotLayout {
            histogram,
            counts,
            units_per_icon,
            icons,
        })
    }
}
