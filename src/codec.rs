//! A configured entry point for encoding and decoding.

use crate::bbox::BoundingBox;
use crate::config::CodecConfig;
use crate::error::Result;
use crate::geohash::GeoHash;
use crate::location::{Location, check_coordinate};
use crate::two_hash::TwoGeoHashBoundingBox;

/// Encodes and decodes geohashes according to a [`CodecConfig`].
///
/// # Examples
///
/// ```
/// use geocell::{CodecConfig, CoordinatePolicy, GeoHashCodec, location};
///
/// let codec = GeoHashCodec::new(
///     CodecConfig::default()
///         .with_default_precision(9)
///         .with_coordinate_policy(CoordinatePolicy::Strict),
/// )?;
/// let hash = codec.encode_default(&location(53.2030476, 45.0324948))?;
/// assert_eq!(hash.to_text()?, "v12n8trdj");
/// assert!(codec.encode_default(&location(91.0, 0.0)).is_err());
/// # Ok::<(), geocell::GeoHashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeoHashCodec {
    config: CodecConfig,
}

impl GeoHashCodec {
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode(&self, location: &impl Location, number_of_characters: usize) -> Result<GeoHash> {
        check_coordinate(
            location.latitude(),
            location.longitude(),
            self.config.coordinate_policy,
        )?;
        GeoHash::from_location(location, number_of_characters)
    }

    pub fn encode_default(&self, location: &impl Location) -> Result<GeoHash> {
        self.encode(location, self.config.default_precision)
    }

    pub fn decode(&self, text: &str) -> Result<GeoHash> {
        GeoHash::from_text(text)
    }

    /// Corner hashes of `bbox` at the configured precision.
    pub fn bounding_box_hashes(&self, bbox: &BoundingBox) -> Result<TwoGeoHashBoundingBox> {
        check_coordinate(
            bbox.max_latitude(),
            bbox.min_longitude(),
            self.config.coordinate_policy,
        )?;
        check_coordinate(
            bbox.min_latitude(),
            bbox.max_longitude(),
            self.config.coordinate_policy,
        )?;
        TwoGeoHashBoundingBox::from_bounding_box(bbox, self.config.default_precision)
    }
}
