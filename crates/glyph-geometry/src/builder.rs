//! Liquid-segment geometry for bucket glyphs
//!
//! `resolution + 1` ascending levels (fractions of the container) define
//! `resolution` stacked rectangles. Segment `i` spans levels `i..=i+1`:
//!
//! - `height = (level[i+1] - level[i]) * extent`
//! - `y = extent * (1 - level[i+1])`
//!
//! where `extent` is the length of the stacking axis. Adjacent segments
//! share an edge (`seg[i+1].bottom() == seg[i].y`) and the bottom segment
//! ends at `extent * (1 - level[0])`, so levels spanning `[0, 1]` partition
//! the full extent.

use crate::curve::{LevelCurve, Linear};
use crate::labels::percentile_label;
use crate::types::{GlyphGeometry, LabelAnchor, LiquidSegment};
use glyph_core::{ticks_exact, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Direction the liquid stack grows in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Bottom to top
    #[default]
    Vertical,
    /// Stacked sideways: computed with the axes swapped, then transposed.
    /// The renderer rotates the result upright.
    Horizontal,
}

/// Builds liquid segments and label anchors for a glyph of a given size
#[derive(Debug, Clone)]
pub struct GlyphBuilder<C: LevelCurve = Linear> {
    width: f64,
    height: f64,
    orientation: Orientation,
    curve: C,
}

impl GlyphBuilder<Linear> {
    /// Create a vertical builder with no level correction
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Error::check_non_negative("glyph width", width)?;
        Error::check_non_negative("glyph height", height)?;
        Ok(Self {
            width,
            height,
            orientation: Orientation::Vertical,
            curve: Linear,
        })
    }
}

impl<C: LevelCurve> GlyphBuilder<C> {
    /// Replace the level correction curve
    pub fn with_curve<D: LevelCurve>(self, curve: D) -> GlyphBuilder<D> {
        GlyphBuilder {
            width: self.width,
            height: self.height,
            orientation: self.orientation,
            curve,
        }
    }

    /// Set the stacking direction
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Glyph width in pixels
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Glyph height in pixels
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Stacking direction
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Level correction curve
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// (cross-axis length, stacking-axis length)
    fn axes(&self) -> (f64, f64) {
        match self.orientation {
            Orientation::Vertical => (self.width, self.height),
            Orientation::Horizontal => (self.height, self.width),
        }
    }

    fn corrected(&self, levels: &[f64]) -> Result<Vec<f64>> {
        if levels.len() < 2 {
            return Err(Error::InvalidArgument(format!(
                "a glyph needs at least 2 levels, got {}",
                levels.len()
            )));
        }
        Ok(levels.iter().map(|&level| self.curve.correct(level)).collect())
    }

    /// Liquid segments, bottom to top
    pub fn segments(&self, levels: &[f64]) -> Result<Vec<LiquidSegment>> {
        let corrected = self.corrected(levels)?;
        let (cross, extent) = self.axes();

        Ok(corrected
            .windows(2)
            .map(|pair| {
                let (lower, upper) = (pair[0], pair[1]);
                let segment =
                    LiquidSegment::new(0.0, extent * (1.0 - upper), cross, (upper - lower) * extent);
                match self.orientation {
                    Orientation::Vertical => segment,
                    Orientation::Horizontal => segment.transposed(),
                }
            })
            .collect())
    }

    /// One label per level boundary, top to bottom (maximum first)
    ///
    /// Positions are along the stacking axis in the upright frame, so they
    /// are not transposed for horizontal stacks.
    pub fn anchors(&self, levels: &[f64]) -> Result<Vec<LabelAnchor>> {
        let corrected = self.corrected(levels)?;
        let (_, extent) = self.axes();
        let probabilities = ticks_exact(0.0, 1.0, corrected.len());

        Ok(corrected
            .iter()
            .zip(probabilities)
            .rev()
            .map(|(&level, p)| LabelAnchor::new(extent * (1.0 - level), p, percentile_label(p)))
            .collect())
    }

    /// Segments and unstaggered label anchors
    #[instrument(level = "debug", skip_all, fields(levels = levels.len(), curve = self.curve.name()))]
    pub fn build(&self, levels: &[f64]) -> Result<GlyphGeometry> {
        let segments = self.segments(levels)?;
        let labels = self.anchors(levels)?;
        debug!(
            segments = segments.len(),
            orientation = ?self.orientation,
            "built glyph geometry"
        );
        Ok(GlyphGeometry { segments, labels })
    }
}

/// Vertical, uncorrected segments for `levels` in a `width` x `height` box
///
/// ```rust
/// let segments = glyph_geometry::build(&[0.0, 0.25, 0.5, 0.75, 1.0], 150.0, 200.0).unwrap();
/// assert_eq!(segments.len(), 4);
/// assert_eq!(segments[0].y, 150.0);
/// assert_eq!(segments[3].y, 0.0);
/// ```
pub fn build(levels: &[f64], width: f64, height: f64) -> Result<Vec<LiquidSegment>> {
    GlyphBuilder::new(width, height)?.segments(levels)
}
