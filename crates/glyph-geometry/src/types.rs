//! Geometric descriptors handed to renderers

use serde::Serialize;
use std::fmt;

/// One rectangle of liquid between two adjacent levels
///
/// Coordinates use a top-left origin: higher liquid sits at smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiquidSegment {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LiquidSegment {
    /// Create a new segment
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Lower edge (`y + height`)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Right edge (`x + width`)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Swap the axes
    pub fn transposed(&self) -> Self {
        Self::new(self.y, self.x, self.height, self.width)
    }
}

impl fmt::Display for LiquidSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rect(x={:.2}, y={:.2}, w={:.2}, h={:.2})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// A side label pinned to one level boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelAnchor {
    /// Position along the stacking axis, in the upright frame
    pub y: f64,
    /// Probability of the level this label names
    pub probability: f64,
    /// Display text, e.g. "75th Percentile"
    pub text: String,
    /// Horizontal stagger applied to avoid collisions (0 or negative)
    pub offset: f64,
}

impl LabelAnchor {
    /// Create an anchor with no stagger
    pub fn new(y: f64, probability: f64, text: impl Into<String>) -> Self {
        Self {
            y,
            probability,
            text: text.into(),
            offset: 0.0,
        }
    }
}

/// Segments and labels for one glyph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphGeometry {
    /// Liquid segments, bottom to top
    pub segments: Vec<LiquidSegment>,
    /// Label anchors, top to bottom (maximum first)
    pub labels: Vec<LabelAnchor>,
}

impl GlyphGeometry {
    /// Number of segments (the resolution)
    pub fn resolution(&self) -> usize {
        self.segments.len()
    }

    /// Segments in visual top-to-bottom order
    pub fn segments_top_down(&self) -> Vec<LiquidSegment> {
        self.segments.iter().rev().copied().collect()
    }

    /// Sum of segment heights
    pub fn total_height(&self) -> f64 {
        self.segments.iter().map(|s| s.height).sum()
    }
}
