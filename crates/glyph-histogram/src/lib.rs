//! Binning and icon apportionment for quantile dot-histograms
//!
//! This crate partitions a domain into fixed-width bins, apportions an exact
//! icon budget across them, and lays out the resulting icon stacks.
//!
//! # Key Features
//!
//! - **Fixed-width partitions** of a [`Domain`](glyph_core::Domain), half-open bins
//! - **Exact apportionment**: per-bin icon counts always sum to the budget
//! - **Dot-histogram layout**: one placement per icon, stacked per bin
//!
//! # Examples
//!
//! ## Apportioning icons
//!
//! ```rust
//! use glyph_histogram::{distribute, NumericBin};
//!
//! let bins = vec![NumericBin::with_count(3), NumericBin::with_count(3), NumericBin::with_count(2)];
//! // Rounding alone would give 2 + 2 + 1 = 5 icons
//! let icons = distribute(&bins, 2.0, 4).unwrap();
//! assert_eq!(icons.iter().sum::<usize>(), 4);
//! ```
//!
//! ## Laying out a dot-histogram
//!
//! ```rust
//! use glyph_core::Domain;
//! use glyph_histogram::DotHistogram;
//!
//! let sample: Vec<f64> = (0..50).map(|i| i as f64 * 20.0).collect();
//! let dots = DotHistogram::new(Domain::new(0.0, 1000.0).unwrap(), 10, 25);
//! let layout = dots.layout(&sample).unwrap();
//!
//! assert_eq!(layout.icons.len(), 25);
//! for icon in &layout.icons {
//!     println!("bin {} at {:.1}: stack {}", icon.bin, icon.value, icon.stack);
//! }
//! ```

pub mod builders;
pub mod distributor;
pub mod dot;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::FixedWidthBuilder;
pub use distributor::{distribute, BinDistributor};
pub use dot::{DotHistogram, DotLayout, IconPlacement};
pub use traits::HistogramBuilder;
pub use types::{Histogram, NumericBin};

/// Create a histogram with a fixed number of equal-width bins over `domain`
pub fn fixed_histogram(
    data: &[f64],
    domain: glyph_core::Domain,
    num_bins: usize,
) -> crate::Result<Histogram> {
    FixedWidthBuilder::new(num_bins, domain).build(data)
}

pub use glyph_core::{Error, Result};
