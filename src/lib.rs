//! # Bucket Glyph
//!
//! Geometry for showing distributions as containers of liquid.
//!
//! A bucket glyph samples a distribution at evenly spaced quantiles and fills
//! a container with one layer of liquid per quantile interval, so a dense
//! region of the distribution shows up as a thin layer. A quantile
//! dot-histogram shows the same sample as stacks of icons, each icon standing
//! for an equal share of the observations.
//!
//! ## Crates
//!
//! - `glyph-core`: shared error type, value domains and tick generation
//! - `glyph-quantile`: quantile sampling of ascending samples
//! - `glyph-histogram`: fixed-width bins, icon apportionment and dot layout
//! - `glyph-geometry`: container curves, liquid segments and side labels
//!
//! ## Quick Start
//!
//! ```rust
//! use bucket_glyph::prelude::*;
//!
//! let sample: Vec<f64> = (1..=100).map(f64::from).collect();
//!
//! let config = GlyphConfig::default().with_domain(0.0, 100.0);
//! let glyph = BucketGlyph::bucket(config).unwrap();
//! let geometry = glyph.render(&sample).unwrap();
//!
//! assert_eq!(geometry.segments.len(), 4);
//! for label in &geometry.labels {
//!     println!("{} at y={:.1} (offset {})", label.text, label.y, label.offset);
//! }
//!
//! // The same sample as 25 icons in 10 bins
//! let dots = DotHistogramConfig { bins: 10, icons: 25, ..Default::default() };
//! let layout = bucket_glyph::dot_histogram(&DotHistogramConfig {
//!     domain: DomainConfig { min: 0.0, max: 100.0 },
//!     ..dots
//! })
//! .unwrap()
//! .layout(&sample)
//! .unwrap();
//! assert_eq!(layout.icons.len(), 25);
//! ```
//!
//! ## Features
//!
//! - `parallel`: render batches of samples with rayon

pub mod config;
pub mod pipeline;

pub use config::{DomainConfig, DotHistogramConfig, GlyphConfig, LabelConfig};
pub use pipeline::{dot_histogram, BucketGlyph};

// Re-export member crates
pub use glyph_core;
pub use glyph_geometry;
pub use glyph_histogram;
pub use glyph_quantile;

pub use glyph_core::{ticks_exact, Domain, Error, Result};
pub use glyph_geometry::{
    ContainerShape, Droplet, GlyphBuilder, GlyphGeometry, LabelAnchor, LabelOffsetter,
    LevelCurve, Linear, LiquidSegment, Orientation,
};
pub use glyph_histogram::{BinDistributor, DotHistogram, DotLayout, IconPlacement, NumericBin};
pub use glyph_quantile::{quantiles, QuantileSampler};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BinDistributor, BucketGlyph, ContainerShape, Domain, DomainConfig, DotHistogram,
        DotHistogramConfig, Error, GlyphConfig, GlyphGeometry, LabelOffsetter, NumericBin,
        QuantileSampler, Result,
    };
}
