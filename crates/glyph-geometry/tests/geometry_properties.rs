//! Property tests for segment contiguity and label staggering

use glyph_geometry::{
    build, Droplet, GlyphBuilder, LabelAnchor, LabelOffsetter, LevelCurve, Orientation,
};
use proptest::prelude::*;

fn closed_levels(mut interior: Vec<f64>) -> Vec<f64> {
    interior.sort_by(f64::total_cmp);
    let mut levels = Vec::with_capacity(interior.len() + 2);
    levels.push(0.0);
    levels.extend(interior);
    levels.push(1.0);
    levels
}

proptest! {
    #[test]
    fn prop_segments_partition_height(
        interior in prop::collection::vec(0.0..=1.0f64, 0..20),
        width in 1.0..500.0f64,
        height in 1.0..500.0f64,
    ) {
        let levels = closed_levels(interior);
        let segments = build(&levels, width, height).unwrap();

        prop_assert_eq!(segments.len(), levels.len() - 1);
        let total: f64 = segments.iter().map(|s| s.height).sum();
        prop_assert!((total - height).abs() < 1e-6);
        prop_assert!((segments[0].bottom() - height).abs() < 1e-6);
        for pair in segments.windows(2) {
            prop_assert!((pair[1].bottom() - pair[0].y).abs() < 1e-6);
            prop_assert!(pair[1].y <= pair[0].y + 1e-9);
        }
        for segment in &segments {
            prop_assert_eq!(segment.x, 0.0);
            prop_assert_eq!(segment.width, width);
            prop_assert!(segment.height >= 0.0);
        }
    }

    #[test]
    fn prop_horizontal_is_transposed_vertical(
        interior in prop::collection::vec(0.0..=1.0f64, 0..10),
        width in 1.0..500.0f64,
        height in 1.0..500.0f64,
    ) {
        let levels = closed_levels(interior);
        let horizontal = GlyphBuilder::new(width, height)
            .unwrap()
            .with_orientation(Orientation::Horizontal)
            .segments(&levels)
            .unwrap();
        let swapped = build(&levels, height, width).unwrap();

        for (h, v) in horizontal.iter().zip(&swapped) {
            prop_assert_eq!(*h, v.transposed());
        }
        let total: f64 = horizontal.iter().map(|s| s.width).sum();
        prop_assert!((total - width).abs() < 1e-6);
    }

    #[test]
    fn prop_droplet_levels_stay_contiguous(
        interior in prop::collection::vec(0.0..=1.0f64, 0..10),
    ) {
        let levels = closed_levels(interior);
        let builder = GlyphBuilder::new(200.0, 200.0).unwrap().with_curve(Droplet);
        let segments = builder.segments(&levels).unwrap();
        for pair in segments.windows(2) {
            prop_assert!((pair[1].bottom() - pair[0].y).abs() < 1e-6);
        }
        let expected = (Droplet.correct(1.0) - Droplet.correct(0.0)) * 200.0;
        let total: f64 = segments.iter().map(|s| s.height).sum();
        prop_assert!((total - expected).abs() < 1e-6);
    }

    #[test]
    fn prop_separated_labels_are_not_staggered(
        start in -100.0..100.0f64,
        gaps in prop::collection::vec(15.5..100.0f64, 0..20),
    ) {
        let mut ys = vec![start];
        for gap in gaps {
            let last = ys[ys.len() - 1];
            ys.push(last + gap);
        }
        let offsets = LabelOffsetter::new(15.0).unwrap().offsets(ys.iter().copied());
        prop_assert!(offsets.iter().all(|&o| o == 0.0));
    }

    #[test]
    fn prop_offsets_are_deterministic_and_non_positive(
        ys in prop::collection::vec(0.0..200.0f64, 0..30),
        label_height in 0.0..40.0f64,
    ) {
        let offsetter = LabelOffsetter::new(label_height).unwrap();
        let first = offsetter.offsets(ys.iter().copied());
        let second = offsetter.offsets(ys.iter().copied());
        prop_assert_eq!(&first, &second);
        prop_assert!(first.iter().all(|&o| o <= 0.0));
        if let Some(&head) = first.first() {
            prop_assert_eq!(head, 0.0);
        }
    }
}

#[test]
fn test_label_anchor_chain_scenario() {
    let anchors: Vec<LabelAnchor> = [0.0, 1.0, 2.0]
        .iter()
        .map(|&y| LabelAnchor::new(y, 0.0, ""))
        .collect();
    let step = LabelOffsetter::DEFAULT_STEP;
    assert_eq!(
        glyph_geometry::offsets(&anchors, 5.0).unwrap(),
        vec![0.0, -step, -2.0 * step]
    );
}

#[test]
fn test_geometry_serializes_to_json() {
    let geometry = GlyphBuilder::new(150.0, 200.0)
        .unwrap()
        .build(&[0.0, 0.5, 1.0])
        .unwrap();
    let json = serde_json::to_value(&geometry).unwrap();

    assert_eq!(json["segments"].as_array().unwrap().len(), 2);
    assert_eq!(json["segments"][0]["y"], 100.0);
    assert_eq!(json["labels"][0]["text"], "Maximum");
    assert_eq!(json["labels"][1]["text"], "50th Percentile");
}
