//! Container correction curves
//!
//! A liquid level is a fraction of the container's height. In a straight
//! bucket that fraction can be drawn as-is. A droplet has a rounded bottom,
//! so equal-probability levels have to be remapped before they look equally
//! spaced against the curved mask.

use serde::{Deserialize, Serialize};

/// Maps a normalized fill fraction to a corrected fill fraction
pub trait LevelCurve {
    /// Correct a fill fraction in `[0, 1]`
    fn correct(&self, fraction: f64) -> f64;

    /// Human-readable name of the curve
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> LevelCurve for F
where
    F: Fn(f64) -> f64,
{
    fn correct(&self, fraction: f64) -> f64 {
        self(fraction)
    }
}

/// Identity curve for straight-sided containers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Linear;

impl LevelCurve for Linear {
    fn correct(&self, fraction: f64) -> f64 {
        fraction
    }

    fn name(&self) -> &str {
        "linear"
    }
}

/// Cubic correction for the droplet silhouette
///
/// `max(0, (a*q^3 + b*q^2 + c*q + d) / SCALE)` with `q = fraction - OFFSET`.
/// The constants were fitted once against the droplet mask; another
/// silhouette needs its own fit.
///
/// Output is never negative. It is only guaranteed to stay within `[0, 1]`
/// for input in `[0, 1]`; out-of-range input is passed through the
/// polynomial unchecked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Droplet;

impl Droplet {
    /// Shift applied to the input before evaluating the cubic
    pub const OFFSET: f64 = 0.0088;
    /// Cubic coefficients, highest power first
    pub const COEFFICIENTS: [f64; 4] = [3.1304, -4.2384, 3.3471, 0.0298];
    /// Normalizing divisor
    pub const SCALE: f64 = 2.2326;
    /// Lower bound of the output
    pub const FLOOR: f64 = 0.0;
}

impl LevelCurve for Droplet {
    fn correct(&self, fraction: f64) -> f64 {
        let q = fraction - Self::OFFSET;
        let [a, b, c, d] = Self::COEFFICIENTS;
        let cubic = a * q.powi(3) + b * q.powi(2) + c * q + d;
        (cubic / Self::SCALE).max(Self::FLOOR)
    }

    fn name(&self) -> &str {
        "droplet"
    }
}

/// Container silhouettes with a known correction and stacking direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerShape {
    /// Straight-sided bucket, stacked bottom to top
    #[default]
    Bucket,
    /// Droplet, stacked sideways and rotated upright by the renderer
    Droplet,
}

impl ContainerShape {
    /// Stacking direction used for this silhouette
    pub fn orientation(&self) -> crate::Orientation {
        match self {
            Self::Bucket => crate::Orientation::Vertical,
            Self::Droplet => crate::Orientation::Horizontal,
        }
    }
}

impl LevelCurve for ContainerShape {
    fn correct(&self, fraction: f64) -> f64 {
        match self {
            Self::Bucket => Linear.correct(fraction),
            Self::Droplet => Droplet.correct(fraction),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Bucket => Linear.name(),
            Self::Droplet => Droplet.name(),
        }
    }
}
