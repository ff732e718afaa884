//! End-to-end glyph rendering
//!
//! [`BucketGlyph`] wires the stages together for one configuration:
//!
//! 1. sample `resolution + 1` quantiles of the ascending sample
//! 2. normalize them against the configured domain
//! 3. correct them for the container silhouette and build the segments
//! 4. stagger the side labels so neighbours do not overlap
//!
//! Every stage is a pure function of its inputs, so independent samples can
//! be rendered concurrently (see [`BucketGlyph::render_batch`]).

use crate::config::{DotHistogramConfig, GlyphConfig};
use glyph_core::{Domain, Result};
use glyph_geometry::{ContainerShape, GlyphBuilder, GlyphGeometry, LabelOffsetter};
use glyph_histogram::DotHistogram;
use glyph_quantile::QuantileSampler;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A configured renderer for one glyph style
#[derive(Debug, Clone)]
pub struct BucketGlyph {
    config: GlyphConfig,
    domain: Domain,
    sampler: QuantileSampler,
    builder: GlyphBuilder<ContainerShape>,
    offsetter: LabelOffsetter,
}

impl BucketGlyph {
    /// Create a renderer for the shape named in `config`
    pub fn new(config: GlyphConfig) -> Result<Self> {
        config.validate()?;
        let domain = config.domain()?;
        let sampler = QuantileSampler::new(config.resolution)?;
        let builder = GlyphBuilder::new(config.width, config.height)?
            .with_curve(config.shape)
            .with_orientation(config.shape.orientation());
        let offsetter = LabelOffsetter::new(config.label.height)?.with_step(config.label.step)?;

        Ok(Self {
            config,
            domain,
            sampler,
            builder,
            offsetter,
        })
    }

    /// Straight-sided bucket stacked bottom to top
    pub fn bucket(config: GlyphConfig) -> Result<Self> {
        Self::new(config.with_shape(ContainerShape::Bucket))
    }

    /// Droplet with corrected levels, stacked sideways
    pub fn droplet(config: GlyphConfig) -> Result<Self> {
        Self::new(config.with_shape(ContainerShape::Droplet))
    }

    /// The validated configuration
    pub fn config(&self) -> &GlyphConfig {
        &self.config
    }

    /// Domain the quantiles are normalized against
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Container silhouette
    pub fn shape(&self) -> ContainerShape {
        self.config.shape
    }

    /// Normalized (uncorrected) quantile levels of an ascending sample
    pub fn levels(&self, sorted_sample: &[f64]) -> Result<Vec<f64>> {
        let quantiles = self.sampler.sample(sorted_sample)?;
        Ok(quantiles
            .into_iter()
            .map(|q| self.domain.normalize(q))
            .collect())
    }

    /// Segments and staggered labels for an ascending sample
    #[instrument(level = "debug", skip_all, fields(n = sorted_sample.len(), shape = ?self.config.shape))]
    pub fn render(&self, sorted_sample: &[f64]) -> Result<GlyphGeometry> {
        let levels = self.levels(sorted_sample)?;
        let mut geometry = self.builder.build(&levels)?;
        self.offsetter.apply(&mut geometry.labels);

        debug!(
            segments = geometry.segments.len(),
            staggered = geometry.labels.iter().filter(|l| l.offset != 0.0).count(),
            "rendered glyph"
        );
        Ok(geometry)
    }

    /// Render many independent ascending samples
    ///
    /// Results are in input order. The first failing sample's error is
    /// returned.
    #[cfg(feature = "parallel")]
    pub fn render_batch<S>(&self, samples: &[S]) -> Result<Vec<GlyphGeometry>>
    where
        S: AsRef<[f64]> + Sync,
    {
        samples
            .par_iter()
            .map(|sample| self.render(sample.as_ref()))
            .collect()
    }

    /// Render many independent ascending samples
    ///
    /// Results are in input order. The first failing sample's error is
    /// returned.
    #[cfg(not(feature = "parallel"))]
    pub fn render_batch<S>(&self, samples: &[S]) -> Result<Vec<GlyphGeometry>>
    where
        S: AsRef<[f64]>,
    {
        samples
            .iter()
            .map(|sample| self.render(sample.as_ref()))
            .collect()
    }
}

/// Build a dot-histogram layout from its configuration
pub fn dot_histogram(config: &DotHistogramConfig) -> Result<DotHistogram> {
    config.validate()?;
    Ok(DotHistogram::new(config.domain()?, config.bins, config.icons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glyph_core::Error;

    fn one_to_hundred() -> Vec<f64> {
        (1..=100).map(f64::from).collect()
    }

    #[test]
    fn test_bucket_render() {
        let glyph = BucketGlyph::bucket(GlyphConfig::default().with_domain(0.0, 100.0)).unwrap();
        let geometry = glyph.render(&one_to_hundred()).unwrap();

        assert_eq!(geometry.segments.len(), 4);
        assert_eq!(geometry.labels.len(), 5);
        // Bottom segment spans 1..25.75 of 100 over 200px
        assert_abs_diff_eq!(geometry.segments[0].height, 49.5, epsilon = 1e-9);
        assert_abs_diff_eq!(geometry.segments[0].bottom(), 198.0, epsilon = 1e-9);
        assert_abs_diff_eq!(geometry.segments[3].y, 0.0, epsilon = 1e-9);
        assert_eq!(geometry.labels[0].text, "Maximum");
        assert!(geometry.labels.iter().all(|l| l.offset == 0.0));
    }

    #[test]
    fn test_droplet_render_is_horizontal() {
        let glyph = BucketGlyph::droplet(GlyphConfig::default().with_domain(0.0, 100.0)).unwrap();
        let geometry = glyph.render(&one_to_hundred()).unwrap();

        for segment in &geometry.segments {
            assert_eq!(segment.y, 0.0);
            assert_eq!(segment.height, 200.0);
        }
        assert_eq!(glyph.shape(), ContainerShape::Droplet);
    }

    #[test]
    fn test_collapsed_sample_staggers_labels() {
        let glyph = BucketGlyph::bucket(GlyphConfig::default()).unwrap();
        let geometry = glyph.render(&[0.0; 50]).unwrap();

        assert!(geometry.segments.iter().all(|s| s.height == 0.0));
        let offsets: Vec<f64> = geometry.labels.iter().map(|l| l.offset).collect();
        assert_eq!(offsets, vec![0.0, -3.0, -6.0, -9.0, -12.0]);
    }

    #[test]
    fn test_render_errors() {
        let glyph = BucketGlyph::new(GlyphConfig::default()).unwrap();
        assert!(matches!(glyph.render(&[]), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            BucketGlyph::new(GlyphConfig::default().with_resolution(0)),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_render_batch_matches_render() {
        let glyph = BucketGlyph::new(GlyphConfig::default()).unwrap();
        let samples = vec![vec![0.1, 0.2, 0.9], vec![0.5; 10], vec![0.0, 1.0]];
        let batch = glyph.render_batch(&samples).unwrap();
        for (sample, geometry) in samples.iter().zip(&batch) {
            assert_eq!(&glyph.render(sample).unwrap(), geometry);
        }

        let with_empty: Vec<Vec<f64>> = vec![vec![0.5], vec![]];
        assert!(glyph.render_batch(&with_empty).is_err());
    }

    #[test]
    fn test_dot_histogram_from_config() {
        let config = DotHistogramConfig::default();
        let dots = dot_histogram(&config).unwrap();
        assert_eq!(dots.icons(), 25);

        let bad = DotHistogramConfig { bins: 0, ..config };
        assert!(dot_histogram(&bad).is_err());
    }
}
