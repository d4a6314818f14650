//! A region described by the hashes of its top-left and bottom-right cells.

use crate::bbox::BoundingBox;
use crate::error::{GeoHashError, Result};
use crate::geohash::{GeoHash, MAX_CHARACTER_PRECISION};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix pair used when a single hash is split into two corner cells.
const SUFFIX_P: char = 'p';
const SUFFIX_B: char = 'b';

/// Two equally precise corner cells and the box spanning them.
///
/// The box runs from the top-left corner of `top_left_hash` to the
/// bottom-right corner of `bottom_right_hash`. The cells in between are
/// implied, never enumerated.
///
/// # Examples
///
/// ```
/// use geocell::TwoGeoHashBoundingBox;
///
/// let region = TwoGeoHashBoundingBox::from_text("v12n8jp")?;
/// assert_eq!(region.to_text()?, "v12n8jppv12n8jpb");
///
/// let parsed = TwoGeoHashBoundingBox::from_paired_text(&region.to_text()?)?;
/// assert_eq!(parsed, region);
/// # Ok::<(), geocell::GeoHashError>(())
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawTwoGeoHash", into = "RawTwoGeoHash")]
pub struct TwoGeoHashBoundingBox {
    top_left_hash: GeoHash,
    bottom_right_hash: GeoHash,
    bounding_box: BoundingBox,
}

#[derive(Serialize, Deserialize)]
struct RawTwoGeoHash {
    top_left_hash: GeoHash,
    bottom_right_hash: GeoHash,
}

impl From<TwoGeoHashBoundingBox> for RawTwoGeoHash {
    fn from(region: TwoGeoHashBoundingBox) -> Self {
        Self {
            top_left_hash: region.top_left_hash,
            bottom_right_hash: region.bottom_right_hash,
        }
    }
}

impl TryFrom<RawTwoGeoHash> for TwoGeoHashBoundingBox {
    type Error = GeoHashError;

    fn try_from(raw: RawTwoGeoHash) -> Result<Self> {
        Self::new(raw.top_left_hash, raw.bottom_right_hash)
    }
}

impl TwoGeoHashBoundingBox {
    /// # Errors
    ///
    /// [`GeoHashError::PrecisionMismatch`] if the hashes differ in bit count.
    pub fn new(top_left_hash: GeoHash, bottom_right_hash: GeoHash) -> Result<Self> {
        if top_left_hash.significant_bits() != bottom_right_hash.significant_bits() {
            log::debug!(
                "Refusing to pair hashes of {} and {} bits",
                top_left_hash.significant_bits(),
                bottom_right_hash.significant_bits()
            );
            return Err(GeoHashError::PrecisionMismatch {
                top_left: top_left_hash.significant_bits(),
                bottom_right: bottom_right_hash.significant_bits(),
            });
        }
        let bounding_box = BoundingBox::new(
            top_left_hash.bounding_box().top_left(),
            bottom_right_hash.bounding_box().bottom_right(),
        );
        Ok(Self {
            top_left_hash,
            bottom_right_hash,
            bounding_box,
        })
    }

    /// Encode the box's top-left and bottom-right corners at the same precision.
    pub fn from_bounding_box(bbox: &BoundingBox, number_of_characters: usize) -> Result<Self> {
        let top_left = GeoHash::from_location(&bbox.top_left(), number_of_characters)?;
        let bottom_right = GeoHash::from_location(&bbox.bottom_right(), number_of_characters)?;
        Self::new(top_left, bottom_right)
    }

    /// Split one hash into two cells one character deeper.
    ///
    /// Odd-length input gets `p` on the top-left cell and `b` on the
    /// bottom-right cell; even-length input the other way round.
    ///
    /// # Errors
    ///
    /// [`GeoHashError::PrecisionExceeded`] if the extended hashes would be
    /// longer than twelve characters, plus any decoding error of the input.
    pub fn from_text(base32: &str) -> Result<Self> {
        let length = base32.chars().count();
        if length >= MAX_CHARACTER_PRECISION {
            return Err(GeoHashError::PrecisionExceeded(format!(
                "Cannot extend a {} character geohash past {} characters",
                length, MAX_CHARACTER_PRECISION
            )));
        }
        let (top_left_suffix, bottom_right_suffix) = if length % 2 == 1 {
            (SUFFIX_P, SUFFIX_B)
        } else {
            (SUFFIX_B, SUFFIX_P)
        };
        let top_left = GeoHash::from_text(&format!("{}{}", base32, top_left_suffix))?;
        let bottom_right = GeoHash::from_text(&format!("{}{}", base32, bottom_right_suffix))?;
        Self::new(top_left, bottom_right)
    }

    /// Same as [`Self::from_text`] on the hash's text form.
    pub fn from_geohash(hash: &GeoHash) -> Result<Self> {
        Self::from_text(&hash.to_text()?)
    }

    /// Parse the concatenated form produced by [`Self::to_text`].
    ///
    /// # Errors
    ///
    /// [`GeoHashError::InvalidArgument`] if the length is odd.
    pub fn from_paired_text(base32: &str) -> Result<Self> {
        let length = base32.chars().count();
        if length % 2 != 0 {
            return Err(GeoHashError::InvalidArgument(format!(
                "A paired geohash needs an even number of characters, got {} in {:?}",
                length, base32
            )));
        }
        let split = base32
            .char_indices()
            .nth(length / 2)
            .map_or(base32.len(), |(index, _)| index);
        let (top_left, bottom_right) = base32.split_at(split);
        Self::new(GeoHash::from_text(top_left)?, GeoHash::from_text(bottom_right)?)
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn top_left_hash(&self) -> &GeoHash {
        &self.top_left_hash
    }

    pub fn bottom_right_hash(&self) -> &GeoHash {
        &self.bottom_right_hash
    }

    /// Both corner hashes concatenated, top-left first.
    pub fn to_text(&self) -> Result<String> {
        Ok(self.top_left_hash.to_text()? + &self.bottom_right_hash.to_text()?)
    }
}

impl PartialEq for TwoGeoHashBoundingBox {
    fn eq(&self, other: &Self) -> bool {
        self.top_left_hash == other.top_left_hash
            && self.bottom_right_hash == other.bottom_right_hash
    }
}

impl Eq for TwoGeoHashBoundingBox {}

impl std::hash::Hash for TwoGeoHashBoundingBox {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.top_left_hash.hash(state);
        self.bottom_right_hash.hash(state);
    }
}

impl fmt::Display for TwoGeoHashBoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.top_left_hash, self.bottom_right_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::location;

    const EPS: f64 = 0.00000001;

    fn fixture() -> (GeoHash, GeoHash, TwoGeoHashBoundingBox) {
        let top_left = GeoHash::from_text("v12n8jq").unwrap();
        let bottom_right = GeoHash::from_text("v12n8kb").unwrap();
        let region = TwoGeoHashBoundingBox::new(top_left, bottom_right).unwrap();
        (top_left, bottom_right, region)
    }

    #[test]
    fn accessors_and_text() {
        let (_, _, region) = fixture();
        assert_eq!(region.top_left_hash().to_text().unwrap(), "v12n8jq");
        assert_eq!(region.bottom_right_hash().to_text().unwrap(), "v12n8kb");
        assert_eq!(region.to_text().unwrap(), "v12n8jqv12n8kb");
        assert_eq!(region.to_string(), "v12n8jqv12n8kb");
    }

    #[test]
    fn spanning_box() {
        let (top_left, bottom_right, region) = fixture();
        let bbox = region.bounding_box();
        assert!((bbox.min_latitude() - bottom_right.bounding_box().min_latitude()).abs() < EPS);
        assert!((bbox.min_longitude() - top_left.bounding_box().min_longitude()).abs() < EPS);
        assert!((bbox.max_latitude() - top_left.bounding_box().max_latitude()).abs() < EPS);
        assert!((bbox.max_longitude() - bottom_right.bounding_box().max_longitude()).abs() < EPS);
    }

    #[test]
    fn rejects_mixed_precision() {
        let short = GeoHash::from_text("v12n8").unwrap();
        let long = GeoHash::from_text("v12n8kb").unwrap();
        assert!(matches!(
            TwoGeoHashBoundingBox::new(short, long),
            Err(GeoHashError::PrecisionMismatch {
                top_left: 25,
                bottom_right: 35
            })
        ));
    }

    #[test]
    fn from_bounding_box() {
        let bbox = BoundingBox::new(
            location(53.203643, 45.008654),
            location(53.200764, 45.011658),
        );
        let region = TwoGeoHashBoundingBox::from_bounding_box(&bbox, 7).unwrap();
        assert_eq!(region.to_text().unwrap(), "v12n8jqv12n8kb");
        assert!(region.bounding_box().contains_box(&bbox));
    }

    #[test]
    fn from_text_suffix_rule() {
        let odd = TwoGeoHashBoundingBox::from_text("v12n8jp").unwrap();
        assert_eq!(odd.to_text().unwrap(), "v12n8jppv12n8jpb");
        let even = TwoGeoHashBoundingBox::from_text("v12n8jpp").unwrap();
        assert_eq!(even.to_text().unwrap(), "v12n8jppbv12n8jppp");
    }

    #[test]
    fn from_text_limits() {
        assert!(matches!(
            TwoGeoHashBoundingBox::from_text("v12n8trdjnvu"),
            Err(GeoHashError::PrecisionExceeded(_))
        ));
        assert!(TwoGeoHashBoundingBox::from_text("v12n8trdjnv").is_ok());
        assert!(matches!(
            TwoGeoHashBoundingBox::from_text("v1a"),
            Err(GeoHashError::InvalidCharacter { character: 'a', .. })
        ));
    }

    #[test]
    fn from_geohash() {
        let hash = GeoHash::from_text("v12n8jpp").unwrap();
        let region = TwoGeoHashBoundingBox::from_geohash(&hash).unwrap();
        assert_eq!(region.to_text().unwrap(), "v12n8jppbv12n8jppp");

        let unaligned = GeoHash::from_bits(0, 3).unwrap();
        assert!(matches!(
            TwoGeoHashBoundingBox::from_geohash(&unaligned),
            Err(GeoHashError::NotBase32Aligned { .. })
        ));
    }

    #[test]
    fn paired_text() {
        let region = TwoGeoHashBoundingBox::from_paired_text("v12n8jppv12n8jpn").unwrap();
        assert_eq!(region.top_left_hash().to_text().unwrap(), "v12n8jpp");
        assert_eq!(region.bottom_right_hash().to_text().unwrap(), "v12n8jpn");
        assert!(matches!(
            TwoGeoHashBoundingBox::from_paired_text("v12n8jpv12n8jpn"),
            Err(GeoHashError::InvalidArgument(_))
        ));
    }

    #[test]
    fn serde_round_trip() {
        let (_, _, region) = fixture();
        let json = serde_json::to_string(&region).unwrap();
        let decoded: TwoGeoHashBoundingBox = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, region);
        assert_eq!(decoded.bounding_box(), region.bounding_box());
    }
}
