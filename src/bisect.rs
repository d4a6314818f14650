//! Interval bisection shared by every path that produces a geohash.
//!
//! Encoding picks each bit by comparing a coordinate with the interval
//! midpoint; decoding is handed the bit. Both narrow the interval the same
//! way, so a decoded cell is always the cell the encoder walked into.

use crate::bbox::BoundingBox;
use crate::geohash::{GeoHash, MAX_BIT_PRECISION, MAX_GEO_HASH_BITS};
use crate::location::{LATITUDE_MAX_ABS, LONGITUDE_MAX_ABS};

/// A closed interval narrowed one bit at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RangeBisector {
    low: f64,
    high: f64,
}

impl RangeBisector {
    pub(crate) const LATITUDE: Self = Self {
        low: -LATITUDE_MAX_ABS,
        high: LATITUDE_MAX_ABS,
    };

    pub(crate) const LONGITUDE: Self = Self {
        low: -LONGITUDE_MAX_ABS,
        high: LONGITUDE_MAX_ABS,
    };

    fn mid(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Narrows towards `value` and returns the chosen bit.
    pub(crate) fn encode(&mut self, value: f64) -> bool {
        let bit = value >= self.mid();
        self.apply(bit)
    }

    /// Keeps the upper half on `true`, the lower half on `false`.
    pub(crate) fn apply(&mut self, bit: bool) -> bool {
        let mid = self.mid();
        if bit {
            self.low = mid;
        } else {
            self.high = mid;
        }
        bit
    }

    pub(crate) fn low(&self) -> f64 {
        self.low
    }

    pub(crate) fn high(&self) -> f64 {
        self.high
    }
}

/// Accumulates interleaved bits, longitude first, while tracking both ranges.
#[derive(Debug, Clone)]
pub(crate) struct CellBuilder {
    latitude: RangeBisector,
    longitude: RangeBisector,
    bits: u64,
    significant_bits: u8,
}

impl CellBuilder {
    pub(crate) fn new() -> Self {
        Self {
            latitude: RangeBisector::LATITUDE,
            longitude: RangeBisector::LONGITUDE,
            bits: 0,
            significant_bits: 0,
        }
    }

    /// Even bit positions belong to longitude, odd ones to latitude.
    pub(crate) fn next_is_longitude(&self) -> bool {
        self.significant_bits % 2 == 0
    }

    pub(crate) fn significant_bits(&self) -> u8 {
        self.significant_bits
    }

    pub(crate) fn push_coordinate(&mut self, latitude: f64, longitude: f64) {
        let bit = if self.next_is_longitude() {
            self.longitude.encode(longitude)
        } else {
            self.latitude.encode(latitude)
        };
        self.append(bit);
    }

    pub(crate) fn push_bit(&mut self, bit: bool) {
        if self.next_is_longitude() {
            self.longitude.apply(bit);
        } else {
            self.latitude.apply(bit);
        }
        self.append(bit);
    }

    fn append(&mut self, bit: bool) {
        debug_assert!(self.significant_bits < MAX_GEO_HASH_BITS);
        self.bits = (self.bits << 1) | u64::from(bit);
        self.significant_bits += 1;
    }

    /// Left-aligns the collected bits and freezes the cell's bounding box.
    pub(crate) fn finish(self) -> GeoHash {
        let bounding_box = BoundingBox::from_ranges(
            self.latitude.low(),
            self.latitude.high(),
            self.longitude.low(),
            self.longitude.high(),
        );
        GeoHash::from_parts(
            align_left(self.bits, self.significant_bits),
            self.significant_bits,
            bounding_box,
        )
    }
}

/// Moves the low `width` bits of `value` to the top of the word.
pub(crate) fn align_left(value: u64, width: u8) -> u64 {
    value
        .checked_shl(u32::from(MAX_BIT_PRECISION - width))
        .unwrap_or(0)
}

/// Moves the top `width` bits of `bits` to the bottom of the word.
pub(crate) fn align_right(bits: u64, width: u8) -> u64 {
    bits.checked_shr(u32::from(MAX_BIT_PRECISION - width))
        .unwrap_or(0)
}

/// Mask covering the low `width` bits.
pub(crate) fn low_mask(width: u8) -> u64 {
    1u64.checked_shl(u32::from(width))
        .map_or(u64::MAX, |bit| bit - 1)
}

/// Mask covering the top `width` bits.
pub(crate) fn prefix_mask(width: u8) -> u64 {
    align_left(low_mask(width), width)
}
