//! Icon apportionment across numeric bins
//!
//! Each bin ideally holds `count / units_per_icon` icons. Rounding every bin
//! independently rarely hits the requested total, so the rounded estimates
//! are repaired one icon at a time (largest-remainder style):
//!
//! - while over budget, take an icon from the non-empty bin with the
//!   smallest residual `ideal - icons` (the most over-represented one);
//! - while under budget, give an icon to the non-empty bin with the largest
//!   residual (the most under-represented one).
//!
//! Each step moves the total by exactly one, so the repair loop runs
//! exactly `|initial_total - target_total|` times. Ties go to the lowest
//! bin index. Empty bins never take part in the repair, so they never
//! receive icons.
//!
//! Both the rounded estimate and the budget are capped at
//! [`BinDistributor::MAX_ICONS`], which bounds the repair loop.

use crate::types::NumericBin;
use glyph_core::{Error, Result};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use tracing::{debug, instrument, trace};

/// Apportions an exact icon budget across bins in proportion to their counts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinDistributor {
    units_per_icon: f64,
}

impl BinDistributor {
    /// Largest icon total the distributor will produce or repair from
    pub const MAX_ICONS: usize = 1 << 24;

    /// Create a distributor where one icon stands for `units_per_icon` samples
    pub fn new(units_per_icon: f64) -> Result<Self> {
        if !units_per_icon.is_finite() || units_per_icon <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "units per icon must be finite and positive, got {units_per_icon}"
            )));
        }
        Ok(Self { units_per_icon })
    }

    /// Samples represented by one icon
    pub fn units_per_icon(&self) -> f64 {
        self.units_per_icon
    }

    /// Distribute `target_total` icons across `bins`
    pub fn distribute(&self, bins: &[NumericBin], target_total: usize) -> Result<Vec<usize>> {
        let counts: Vec<usize> = bins.iter().map(|bin| bin.count).collect();
        self.distribute_counts(&counts, target_total)
    }

    /// Distribute `target_total` icons across raw per-bin sample counts
    ///
    /// Fails with [`Error::Unsatisfiable`] when a positive budget meets bins
    /// that are all empty, and with [`Error::InvalidArgument`] when the budget
    /// or the rounded estimate exceeds [`Self::MAX_ICONS`].
    #[instrument(level = "debug", skip_all, fields(bins = counts.len(), target_total = target_total))]
    pub fn distribute_counts(&self, counts: &[usize], target_total: usize) -> Result<Vec<usize>> {
        let ideal: Vec<f64> = counts
            .iter()
            .map(|&count| count as f64 / self.units_per_icon)
            .collect();
        if target_total > Self::MAX_ICONS {
            return Err(too_many_icons(target_total as f64));
        }

        let mut icons = Vec::with_capacity(ideal.len());
        let mut initial_total: usize = 0;
        for &x in &ideal {
            let rounded = x.round();
            if rounded > Self::MAX_ICONS as f64 {
                return Err(too_many_icons(rounded));
            }
            let rounded = rounded as usize;
            initial_total = initial_total
                .checked_add(rounded)
                .filter(|&total| total <= Self::MAX_ICONS)
                .ok_or_else(|| too_many_icons(ideal.iter().sum()))?;
            icons.push(rounded);
        }

        let steps = initial_total.abs_diff(target_total);
        debug!(initial_total, steps, "rounded initial estimate");

        for _ in 0..steps {
            let idx = if initial_total > target_total {
                let idx = most_over_represented(counts, &ideal, &icons).ok_or_else(|| {
                    Error::Unsatisfiable("no bin has an icon left to remove".to_string())
                })?;
                icons[idx] -= 1;
                idx
            } else {
                let idx = most_under_represented(counts, &ideal, &icons).ok_or_else(|| {
                    Error::Unsatisfiable(format!(
                        "cannot place {target_total} icons: all {} bins are empty",
                        counts.len()
                    ))
                })?;
                icons[idx] += 1;
                idx
            };
            trace!(bin = idx, icons = icons[idx], "adjusted bin");
        }

        Ok(icons)
    }
}

fn too_many_icons(icons: f64) -> Error {
    Error::InvalidArgument(format!(
        "{icons} icons exceed the limit of {}",
        BinDistributor::MAX_ICONS
    ))
}

fn residual(ideal: &[f64], icons: &[usize], i: usize) -> OrderedFloat<f64> {
    OrderedFloat(ideal[i] - icons[i] as f64)
}

/// Non-empty bin with the smallest residual that still holds an icon
fn most_over_represented(counts: &[usize], ideal: &[f64], icons: &[usize]) -> Option<usize> {
    (0..counts.len())
        .filter(|&i| counts[i] != 0 && icons[i] > 0)
        .min_by_key(|&i| residual(ideal, icons, i))
}

/// Non-empty bin with the largest residual
fn most_under_represented(counts: &[usize], ideal: &[f64], icons: &[usize]) -> Option<usize> {
    // min_by_key keeps the first of equal keys, max_by_key would keep the last
    (0..counts.len())
        .filter(|&i| counts[i] != 0)
        .min_by_key(|&i| Reverse(residual(ideal, icons, i)))
}

/// Distribute `target_total` icons across `bins`, one icon per `units_per_icon` samples
pub fn distribute(
    bins: &[NumericBin],
    units_per_icon: f64,
    target_total: usize,
) -> Result<Vec<usize>> {
    BinDistributor::new(units_per_icon)?.distribute(bins, target_total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bins(counts: &[usize]) -> Vec<NumericBin> {
        counts.iter().map(|&c| NumericBin::with_count(c)).collect()
    }

    #[test]
    fn test_single_bin_exact() {
        assert_eq!(distribute(&bins(&[50]), 2.0, 25).unwrap(), vec![25]);
    }

    #[test]
    fn test_rounding_already_exact() {
        assert_eq!(distribute(&bins(&[10, 20, 20]), 2.0, 25).unwrap(), vec![5, 10, 10]);
    }

    #[test]
    fn test_surplus_removed_from_most_over_represented() {
        // ideal [1.5, 1.5, 1.0] rounds to [2, 2, 1] = 5, one too many
        let icons = distribute(&bins(&[3, 3, 2]), 2.0, 4).unwrap();
        assert_eq!(icons, vec![1, 2, 1]);
    }

    #[test]
    fn test_deficit_given_to_most_under_represented() {
        // ideal [1.4, 1.4, 1.2] rounds to [1, 1, 1] = 3, one short
        let icons = distribute(&bins(&[7, 7, 6]), 5.0, 4).unwrap();
        assert_eq!(icons, vec![2, 1, 1]);
    }

    #[test]
    fn test_ties_pick_lowest_index() {
        assert_eq!(distribute(&bins(&[3, 3, 3]), 1.0, 10).unwrap(), vec![4, 3, 3]);
        assert_eq!(distribute(&bins(&[1, 1, 1]), 1.0, 2).unwrap(), vec![0, 1, 1]);
    }

    #[test]
    fn test_empty_bins_never_receive_icons() {
        let icons = distribute(&bins(&[0, 1, 0, 1, 0]), 1.0, 9).unwrap();
        assert_eq!(icons.iter().sum::<usize>(), 9);
        assert_eq!(icons[0], 0);
        assert_eq!(icons[2], 0);
        assert_eq!(icons[4], 0);
    }

    #[test]
    fn test_target_beyond_fair_share_converges() {
        let icons = distribute(&bins(&[1, 2]), 1.0, 30).unwrap();
        assert_eq!(icons.iter().sum::<usize>(), 30);
        assert!(icons[1] >= icons[0]);
    }

    #[test]
    fn test_zero_target_empties_everything() {
        assert_eq!(distribute(&bins(&[14, 1, 14]), 10.0, 0).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_all_empty_bins() {
        assert!(matches!(
            distribute(&bins(&[0, 0, 0]), 1.0, 3),
            Err(Error::Unsatisfiable(_))
        ));
        assert!(matches!(distribute(&[], 1.0, 1), Err(Error::Unsatisfiable(_))));
        assert_eq!(distribute(&bins(&[0, 0]), 1.0, 0).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_tiny_units_per_icon_is_rejected() {
        // Each bin would ask for ~1e300 icons
        assert!(matches!(
            distribute(&bins(&[1, 1]), 1e-300, 0),
            Err(Error::InvalidArgument(_))
        ));
        // Representable, but far too many icons to repair one at a time
        assert!(matches!(
            distribute(&bins(&[1000]), 1e-9, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_icon_limit() {
        let max = BinDistributor::MAX_ICONS;
        assert!(matches!(
            distribute(&bins(&[1]), 1.0, max + 1),
            Err(Error::InvalidArgument(_))
        ));
        // Many bins each under the limit, together over it
        assert!(distribute(&bins(&[max / 2, max / 2, 2]), 1.0, 1).is_err());
        assert_eq!(distribute(&bins(&[max]), 1.0, max).unwrap(), vec![max]);
    }

    #[test]
    fn test_invalid_units_per_icon() {
        assert!(matches!(BinDistributor::new(0.0), Err(Error::InvalidArgument(_))));
        assert!(BinDistributor::new(-2.0).is_err());
        assert!(BinDistributor::new(f64::NAN).is_err());
        assert!(BinDistributor::new(f64::INFINITY).is_err());
    }
}
