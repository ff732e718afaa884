//! Glyph and dot-histogram configuration
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a
//! valid configuration. Semantic checks happen in `validate()`, which the
//! pipeline constructors call before building anything.

use glyph_core::{Domain, Error, Result};
use glyph_geometry::ContainerShape;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bounds of the value domain samples are normalized against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    pub min: f64,
    pub max: f64,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl DomainConfig {
    /// Build the validated domain
    pub fn to_domain(&self) -> Result<Domain> {
        Domain::new(self.min, self.max).map_err(|_| {
            Error::Config(format!(
                "domain [{}, {}] must have finite bounds with min < max",
                self.min, self.max
            ))
        })
    }
}

/// Side-label height and stagger step, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Labels closer than this to their predecessor are staggered
    pub height: f64,
    /// Horizontal distance between staggered labels
    pub step: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            height: 15.0,
            step: 3.0,
        }
    }
}

/// Configuration for one bucket glyph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    /// Glyph width in pixels
    pub width: f64,
    /// Glyph height in pixels
    pub height: f64,
    /// Number of liquid segments (quantile levels minus one)
    pub resolution: usize,
    /// Container silhouette
    pub shape: ContainerShape,
    pub domain: DomainConfig,
    pub label: LabelConfig,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 200.0,
            resolution: 4,
            shape: ContainerShape::Bucket,
            domain: DomainConfig::default(),
            label: LabelConfig::default(),
        }
    }
}

impl GlyphConfig {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the container shape
    pub fn with_shape(mut self, shape: ContainerShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the number of liquid segments
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the value domain
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = DomainConfig { min, max };
        self
    }

    /// The validated value domain
    pub fn domain(&self) -> Result<Domain> {
        self.domain.to_domain()
    }

    /// Check the configuration for values no glyph can be built from
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(Error::Config("resolution must be at least 1".to_string()));
        }
        check_size("glyph width", self.width)?;
        check_size("glyph height", self.height)?;
        check_size("label height", self.label.height)?;
        check_size("label step", self.label.step)?;
        self.domain()?;
        Ok(())
    }
}

/// Configuration for a quantile dot-histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotHistogramConfig {
    /// Number of equal-width bins over the domain
    pub bins: usize,
    /// Total icon budget
    pub icons: usize,
    pub domain: DomainConfig,
}

impl Default for DotHistogramConfig {
    fn default() -> Self {
        Self {
            bins: 20,
            icons: 25,
            domain: DomainConfig::default(),
        }
    }
}

impl DotHistogramConfig {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The validated value domain
    pub fn domain(&self) -> Result<Domain> {
        self.domain.to_domain()
    }

    /// Check the configuration for values no layout can be built from
    pub fn validate(&self) -> Result<()> {
        if self.bins == 0 {
            return Err(Error::Config("bins must be at least 1".to_string()));
        }
        self.domain()?;
        Ok(())
    }
}

fn check_size(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Config(format!(
            "{name} must be finite and non-negative, got {value}"
        )));
    }
    Ok(())
}
