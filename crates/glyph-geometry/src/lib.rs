//! Liquid-segment geometry and side labels for bucket glyphs
//!
//! A bucket glyph shows a distribution as a container filled with layers of
//! liquid, one layer between each pair of adjacent quantile levels. This
//! crate turns normalized levels into rectangles and positions the labels
//! that name each level.
//!
//! # Example
//!
//! ```rust
//! use glyph_geometry::{Droplet, GlyphBuilder, LabelOffsetter, Orientation};
//!
//! let levels = [0.0, 0.05, 0.1, 0.6, 1.0];
//!
//! // Straight bucket
//! let bucket = GlyphBuilder::new(150.0, 200.0).unwrap();
//! let mut geometry = bucket.build(&levels).unwrap();
//! LabelOffsetter::new(15.0).unwrap().apply(&mut geometry.labels);
//!
//! assert_eq!(geometry.segments.len(), 4);
//! assert_eq!(geometry.labels[0].text, "Maximum");
//!
//! // Droplet: corrected levels, stacked sideways
//! let droplet = GlyphBuilder::new(200.0, 200.0)
//!     .unwrap()
//!     .with_curve(Droplet)
//!     .with_orientation(Orientation::Horizontal);
//! let geometry = droplet.build(&levels).unwrap();
//! assert_eq!(geometry.segments[0].height, 200.0);
//! ```

pub mod builder;
pub mod curve;
pub mod labels;
pub mod types;

pub use builder::{build, GlyphBuilder, Orientation};
pub use curve::{ContainerShape, Droplet, LevelCurve, Linear};
pub use glyph_core::{Error, Result};
pub use labels::{offsets, percentile_label, LabelOffsetter};
pub use types::{GlyphGeometry, LabelAnchor, LiquidSegment};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ContainerShape, GlyphBuilder, GlyphGeometry, LabelAnchor, LabelOffsetter, LevelCurve,
        LiquidSegment, Orientation, Result,
    };
}
