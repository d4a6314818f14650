//! The geohash value type and its base32 codec.
//!
//! A geohash packs up to 60 interleaved bits into the top of a `u64`:
//! bit 0 (the most significant) halves the longitude range, bit 1 the
//! latitude range, and so on alternately. Every five bits form one base32
//! character.

use crate::bbox::BoundingBox;
use crate::bisect::{CellBuilder, align_right, prefix_mask};
use crate::config::CoordinatePolicy;
use crate::error::{GeoHashError, Result};
use crate::location::{Location, check_coordinate};
use geo::Point;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

pub const MAX_CHARACTER_PRECISION: usize = 12;
pub const BASE32_BITS: u8 = 5;
pub const MAX_GEO_HASH_BITS: u8 = BASE32_BITS * MAX_CHARACTER_PRECISION as u8;
pub(crate) const MAX_BIT_PRECISION: u8 = u64::BITS as u8;

/// The geohash alphabet. `a`, `i`, `l` and `o` are left out.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

static DECODE_TABLE: Lazy<[Option<u8>; 128]> = Lazy::new(|| {
    let mut table = [None; 128];
    for (code, &character) in BASE32.iter().enumerate() {
        table[usize::from(character)] = Some(code as u8);
    }
    table
});

fn decode_character(character: char) -> Option<u8> {
    if character.is_ascii() {
        DECODE_TABLE[character as usize]
    } else {
        None
    }
}

/// A single geohash cell.
///
/// Two hashes are equal when their bits and significant bit counts are
/// equal; the bounding box is derived from those and never compared.
/// Ordering follows the left-aligned bits, which matches the lexicographic
/// order of the text form, with a prefix sorting before its extensions.
///
/// # Examples
///
/// ```
/// use geocell::GeoHash;
///
/// let hash = GeoHash::from_coordinate(53.2030476, 45.0324948, 9)?;
/// assert_eq!(hash.to_text()?, "v12n8trdj");
/// assert_eq!(hash, "v12n8trdj".parse::<GeoHash>()?);
/// # Ok::<(), geocell::GeoHashError>(())
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawGeoHash", into = "RawGeoHash")]
pub struct GeoHash {
    bits: u64,
    significant_bits: u8,
    bounding_box: BoundingBox,
}

/// Serialized form: the bounding box is recomputed on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawGeoHash {
    bits: u64,
    significant_bits: u8,
}

impl From<GeoHash> for RawGeoHash {
    fn from(hash: GeoHash) -> Self {
        Self {
            bits: hash.bits,
            significant_bits: hash.significant_bits,
        }
    }
}

impl TryFrom<RawGeoHash> for GeoHash {
    type Error = GeoHashError;

    fn try_from(raw: RawGeoHash) -> Result<Self> {
        GeoHash::from_bits(raw.bits, raw.significant_bits)
    }
}

impl GeoHash {
    pub(crate) fn from_parts(bits: u64, significant_bits: u8, bounding_box: BoundingBox) -> Self {
        Self {
            bits,
            significant_bits,
            bounding_box,
        }
    }

    /// Encode a coordinate with `number_of_characters` base32 characters.
    ///
    /// Coordinates are not range checked here; values outside ±90/±180
    /// are logged and bisected as-is. Use [`crate::GeoHashCodec`] with a
    /// strict policy to reject them.
    ///
    /// # Errors
    ///
    /// [`GeoHashError::InvalidArgument`] unless `1 <= number_of_characters <= 12`.
    pub fn from_coordinate(
        latitude: f64,
        longitude: f64,
        number_of_characters: usize,
    ) -> Result<Self> {
        if number_of_characters == 0 || number_of_characters > MAX_CHARACTER_PRECISION {
            return Err(GeoHashError::InvalidArgument(format!(
                "A geohash must be between 1 and {} characters long, got: {}",
                MAX_CHARACTER_PRECISION, number_of_characters
            )));
        }
        check_coordinate(latitude, longitude, CoordinatePolicy::Lenient)?;

        let desired_bits = (number_of_characters * usize::from(BASE32_BITS))
            .min(usize::from(MAX_GEO_HASH_BITS)) as u8;

        let mut builder = CellBuilder::new();
        while builder.significant_bits() < desired_bits {
            builder.push_coordinate(latitude, longitude);
        }
        Ok(builder.finish())
    }

    /// Encode a coordinate at the full twelve characters.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Result<Self> {
        Self::from_coordinate(latitude, longitude, MAX_CHARACTER_PRECISION)
    }

    pub fn from_location(location: &impl Location, number_of_characters: usize) -> Result<Self> {
        Self::from_coordinate(location.latitude(), location.longitude(), number_of_characters)
    }

    /// Decode base32 text. The empty string is the root cell covering the globe.
    ///
    /// # Errors
    ///
    /// [`GeoHashError::PrecisionExceeded`] for more than twelve characters,
    /// [`GeoHashError::InvalidCharacter`] for anything outside the alphabet.
    pub fn from_text(geohash: &str) -> Result<Self> {
        let length = geohash.chars().count();
        if length > MAX_CHARACTER_PRECISION {
            return Err(GeoHashError::PrecisionExceeded(format!(
                "A geohash can only be {} characters long, got {} in {:?}",
                MAX_CHARACTER_PRECISION, length, geohash
            )));
        }

        let mut builder = CellBuilder::new();
        for (position, character) in geohash.chars().enumerate() {
            let code = decode_character(character).ok_or(GeoHashError::InvalidCharacter {
                character,
                position,
            })?;
            for shift in (0..BASE32_BITS).rev() {
                builder.push_bit((code >> shift) & 1 == 1);
            }
        }
        log::trace!(
            "Decoded {:?} into {} bits",
            geohash,
            builder.significant_bits()
        );
        Ok(builder.finish())
    }

    /// Rebuild a hash from left-aligned bits.
    ///
    /// # Errors
    ///
    /// [`GeoHashError::PrecisionExceeded`] above 60 significant bits and
    /// [`GeoHashError::InvalidArgument`] if bits below the prefix are set.
    pub fn from_bits(bits: u64, significant_bits: u8) -> Result<Self> {
        if significant_bits > MAX_GEO_HASH_BITS {
            return Err(GeoHashError::PrecisionExceeded(format!(
                "A geohash holds at most {} bits, got {}",
                MAX_GEO_HASH_BITS, significant_bits
            )));
        }
        if bits & !prefix_mask(significant_bits) != 0 {
            return Err(GeoHashError::InvalidArgument(format!(
                "Bits beyond the first {} must be zero, got {:#018x}",
                significant_bits, bits
            )));
        }
        Ok(Self::rebuild(bits, significant_bits))
    }

    /// Decode-direction walk over the top `significant_bits` of `bits`.
    /// Callers guarantee `significant_bits <= 60`; lower bits are ignored.
    pub(crate) fn rebuild(bits: u64, significant_bits: u8) -> Self {
        let mut builder = CellBuilder::new();
        for index in 0..significant_bits {
            builder.push_bit((bits >> (MAX_BIT_PRECISION - 1 - index)) & 1 == 1);
        }
        builder.finish()
    }

    /// Render the base32 text form.
    ///
    /// # Errors
    ///
    /// [`GeoHashError::NotBase32Aligned`] when the bit count is not a
    /// multiple of five, which neighbour arithmetic can produce.
    pub fn to_text(&self) -> Result<String> {
        if self.significant_bits % BASE32_BITS != 0 {
            return Err(GeoHashError::NotBase32Aligned {
                significant_bits: self.significant_bits,
            });
        }
        let characters = usize::from(self.significant_bits / BASE32_BITS);
        let mut remaining = self.bits;
        let mut text = String::with_capacity(characters);
        for _ in 0..characters {
            let pointer = (remaining >> (MAX_BIT_PRECISION - BASE32_BITS)) as usize;
            text.push(char::from(BASE32[pointer]));
            remaining <<= BASE32_BITS;
        }
        Ok(text)
    }

    /// Left-aligned bits; everything below the significant prefix is zero.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn significant_bits(&self) -> u8 {
        self.significant_bits
    }

    /// Number of text characters, if the hash can be rendered.
    pub fn character_precision(&self) -> Option<usize> {
        (self.significant_bits % BASE32_BITS == 0)
            .then(|| usize::from(self.significant_bits / BASE32_BITS))
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub fn center(&self) -> Point<f64> {
        self.bounding_box.center_point()
    }

    /// Check if a point falls inside this cell.
    pub fn contains(&self, point: &impl Location) -> bool {
        self.bounding_box.contains(point)
    }

    /// Check if this cell is `other` or one of its ancestors.
    pub fn within(&self, other: &GeoHash) -> bool {
        self.significant_bits >= other.significant_bits
            && align_right(self.bits, other.significant_bits)
                == align_right(other.bits, other.significant_bits)
    }
}

impl PartialEq for GeoHash {
    fn eq(&self, other: &Self) -> bool {
        self.significant_bits == other.significant_bits && self.bits == other.bits
    }
}

impl Eq for GeoHash {}

impl Hash for GeoHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
        self.significant_bits.hash(state);
    }
}

impl PartialOrd for GeoHash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GeoHash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits
            .cmp(&other.bits)
            .then(self.significant_bits.cmp(&other.significant_bits))
    }
}

/// Text form for aligned hashes, otherwise the significant bits in binary.
impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text() {
            Ok(text) => f.pad(&text),
            Err(_) => write!(
                f,
                "{:0width$b}",
                self.ord(),
                width = usize::from(self.significant_bits)
            ),
        }
    }
}

impl FromStr for GeoHash {
    type Err = GeoHashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}
