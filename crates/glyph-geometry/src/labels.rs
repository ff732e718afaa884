//! Side-label collision staggering and label text
//!
//! Labels sit beside the glyph at their level's position. When two
//! neighbouring labels are closer than a label's height, the later one is
//! pushed left by one step; every further collision in the same chain
//! pushes one more step. A label clear of its predecessor resets the chain.
//!
//! Only the immediately preceding label is compared, so this is a greedy
//! single pass rather than a global layout.

use crate::types::LabelAnchor;
use glyph_core::{Error, Result};

/// Computes per-label horizontal staggers for a sequence of label positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOffsetter {
    label_height: f64,
    step: f64,
}

impl LabelOffsetter {
    /// Horizontal distance between staggered labels, in pixels
    pub const DEFAULT_STEP: f64 = 3.0;

    /// Create an offsetter for labels `label_height` tall
    pub fn new(label_height: f64) -> Result<Self> {
        Error::check_non_negative("label height", label_height)?;
        Ok(Self {
            label_height,
            step: Self::DEFAULT_STEP,
        })
    }

    /// Set the horizontal step width
    pub fn with_step(mut self, step: f64) -> Result<Self> {
        Error::check_non_negative("label step", step)?;
        self.step = step;
        Ok(self)
    }

    /// Minimum gap between labels before they are staggered
    pub fn label_height(&self) -> f64 {
        self.label_height
    }

    /// Horizontal distance per stagger
    pub fn step(&self) -> f64 {
        self.step
    }

    fn stagger(&self, chain: usize) -> f64 {
        if chain == 0 {
            0.0
        } else {
            chain as f64 * -self.step
        }
    }

    /// Offsets for label positions given in display order
    pub fn offsets<I>(&self, positions: I) -> Vec<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        positions
            .into_iter()
            .scan((None::<f64>, 0usize), |(prev, chain), y| {
                let collides = prev.is_some_and(|p| (p - y).abs() < self.label_height);
                *chain = if collides { *chain + 1 } else { 0 };
                *prev = Some(y);
                Some(self.stagger(*chain))
            })
            .collect()
    }

    /// Offsets for anchors in display order
    pub fn offsets_for(&self, anchors: &[LabelAnchor]) -> Vec<f64> {
        self.offsets(anchors.iter().map(|anchor| anchor.y))
    }

    /// Write each anchor's stagger into its `offset`
    pub fn apply(&self, anchors: &mut [LabelAnchor]) {
        let offsets = self.offsets_for(anchors);
        for (anchor, offset) in anchors.iter_mut().zip(offsets) {
            anchor.offset = offset;
        }
    }
}

/// Offsets for `anchors` with the default step
pub fn offsets(anchors: &[LabelAnchor], label_height: f64) -> Result<Vec<f64>> {
    Ok(LabelOffsetter::new(label_height)?.offsets_for(anchors))
}

/// Display text for the level at probability `p`
///
/// `0` is "Minimum", `1` is "Maximum", anything else an ordinal percentile
/// rounded to one decimal ("25th Percentile", "12.5th Percentile") and kept
/// within `[0.1, 99.9]` so only the endpoints read as 0 or 100.
pub fn percentile_label(p: f64) -> String {
    if p <= 0.0 {
        return "Minimum".to_string();
    }
    if p >= 1.0 {
        return "Maximum".to_string();
    }

    let percent = ((p * 1000.0).round() / 10.0).clamp(0.1, 99.9);
    if percent.fract() == 0.0 {
        let whole = percent as u64;
        format!("{whole}{} Percentile", ordinal_suffix(whole))
    } else {
        format!("{percent}th Percentile")
    }
}

fn ordinal_suffix(n: u64) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors(ys: &[f64]) -> Vec<LabelAnchor> {
        ys.iter().map(|&y| LabelAnchor::new(y, 0.0, "")).collect()
    }

    #[test]
    fn test_chained_collisions() {
        let offsetter = LabelOffsetter::new(5.0).unwrap();
        assert_eq!(offsetter.offsets([0.0, 1.0, 2.0]), vec![0.0, -3.0, -6.0]);
    }

    #[test]
    fn test_well_separated_labels() {
        let offsetter = LabelOffsetter::new(15.0).unwrap();
        assert_eq!(
            offsetter.offsets([0.0, 50.0, 100.0, 150.0, 200.0]),
            vec![0.0; 5]
        );
    }

    #[test]
    fn test_exact_label_height_does_not_collide() {
        let offsetter = LabelOffsetter::new(15.0).unwrap();
        assert_eq!(offsetter.offsets([0.0, 15.0, 30.0]), vec![0.0; 3]);
    }

    #[test]
    fn test_chain_resets() {
        let offsetter = LabelOffsetter::new(10.0).unwrap().with_step(4.0).unwrap();
        assert_eq!(
            offsetter.offsets([0.0, 2.0, 50.0, 52.0, 54.0, 100.0]),
            vec![0.0, -4.0, 0.0, -4.0, -8.0, 0.0]
        );
    }

    #[test]
    fn test_only_predecessor_is_compared() {
        // 0 and 8 are within range, 8 and 16 too, 0 and 16 are not: still a chain
        let offsetter = LabelOffsetter::new(10.0).unwrap();
        assert_eq!(offsetter.offsets([0.0, 8.0, 16.0]), vec![0.0, -3.0, -6.0]);
    }

    #[test]
    fn test_apply_and_repeatability() {
        let offsetter = LabelOffsetter::new(15.0).unwrap();
        let mut labels = anchors(&[0.0, 0.0, 0.0, 100.0]);
        offsetter.apply(&mut labels);
        let applied: Vec<f64> = labels.iter().map(|a| a.offset).collect();
        assert_eq!(applied, vec![0.0, -3.0, -6.0, 0.0]);
        assert_eq!(offsetter.offsets_for(&labels), applied);
        assert_eq!(offsets(&labels, 15.0).unwrap(), applied);
    }

    #[test]
    fn test_empty_and_invalid() {
        let offsetter = LabelOffsetter::new(15.0).unwrap();
        assert!(offsetter.offsets(std::iter::empty()).is_empty());
        assert!(matches!(LabelOffsetter::new(-1.0), Err(Error::InvalidArgument(_))));
        assert!(offsetter.with_step(f64::NAN).is_err());
    }

    #[test]
    fn test_percentile_label() {
        assert_eq!(percentile_label(0.0), "Minimum");
        assert_eq!(percentile_label(1.0), "Maximum");
        assert_eq!(percentile_label(0.25), "25th Percentile");
        assert_eq!(percentile_label(0.5), "50th Percentile");
        assert_eq!(percentile_label(0.01), "1st Percentile");
        assert_eq!(percentile_label(0.02), "2nd Percentile");
        assert_eq!(percentile_label(0.03), "3rd Percentile");
        assert_eq!(percentile_label(0.11), "11th Percentile");
        assert_eq!(percentile_label(0.125), "12.5th Percentile");
        assert_eq!(percentile_label(0.21), "21st Percentile");
    }

    #[test]
    fn test_percentile_label_near_endpoints() {
        assert_eq!(percentile_label(0.0001), "0.1th Percentile");
        assert_eq!(percentile_label(1e-12), "0.1th Percentile");
        assert_eq!(percentile_label(0.9999), "99.9th Percentile");
        assert_eq!(percentile_label(0.999), "99.9th Percentile");
    }
}
