//! Ordinal stepping and neighbour lookup.
//!
//! Both work on the raw bits. The ordinal is the significant prefix read as
//! an integer; stepping it moves to the lexicographically adjacent cell.
//! Neighbours split the bits into a longitude plane (even positions) and a
//! latitude plane (odd positions), step one plane, and interleave again.
//!
//! Arithmetic wraps: stepping past the last ordinal, or north of the top
//! row of cells, lands on the opposite end of the range. Antimeridian
//! wrapping is geographically right; pole wrapping is not, and is kept for
//! compatibility with existing keys.

use crate::bisect::{CellBuilder, align_left, align_right, low_mask};
use crate::error::{GeoHashError, Result};
use crate::geohash::{BASE32_BITS, GeoHash, MAX_BIT_PRECISION, MAX_GEO_HASH_BITS};

/// The bits of one axis, right-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPlane {
    value: u64,
    width: u8,
}

impl BitPlane {
    /// Row (latitude) or column (longitude) index of the cell on its axis.
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    fn push(&mut self, bit: bool) {
        self.value = (self.value << 1) | u64::from(bit);
        self.width += 1;
    }

    fn bit(&self, index: u8) -> bool {
        (self.value >> (self.width - 1 - index)) & 1 == 1
    }

    fn step(self, delta: i64) -> Self {
        Self {
            value: self.value.wrapping_add_signed(delta) & low_mask(self.width),
            width: self.width,
        }
    }
}

/// Positions of the surrounding cells, in the order [`GeoHash::adjacent`] returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Index of this direction in [`GeoHash::adjacent`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl GeoHash {
    /// The significant bits as an integer rank among cells of this precision.
    pub fn ord(&self) -> u64 {
        align_right(self.bits(), self.significant_bits())
    }

    /// Build the cell with rank `ordinal` at `significant_bits` precision.
    /// Bits of `ordinal` above the precision are dropped.
    ///
    /// # Errors
    ///
    /// [`GeoHashError::PrecisionExceeded`] above 60 significant bits.
    pub fn from_ordinal(ordinal: u64, significant_bits: u8) -> Result<Self> {
        if significant_bits > MAX_GEO_HASH_BITS {
            return Err(GeoHashError::PrecisionExceeded(format!(
                "A geohash holds at most {} bits, got {}",
                MAX_GEO_HASH_BITS, significant_bits
            )));
        }
        Ok(Self::rebuild(
            align_left(ordinal, significant_bits),
            significant_bits,
        ))
    }

    /// Move `step` cells along the ordinal, wrapping at either end.
    ///
    /// ```
    /// use geocell::GeoHash;
    ///
    /// let hash: GeoHash = "v12n8trdj".parse()?;
    /// assert_eq!(hash.next(2).to_text()?, "v12n8trdm");
    /// # Ok::<(), geocell::GeoHashError>(())
    /// ```
    #[must_use]
    pub fn next(&self, step: i64) -> Self {
        let ordinal = self.ord().wrapping_add_signed(step);
        Self::rebuild(
            align_left(ordinal, self.significant_bits()),
            self.significant_bits(),
        )
    }

    #[must_use]
    pub fn next_cell(&self) -> Self {
        self.next(1)
    }

    #[must_use]
    pub fn prev(&self) -> Self {
        self.next(-1)
    }

    /// Latitude bits; `significant_bits / 2` of them.
    pub fn latitude_plane(&self) -> BitPlane {
        self.split_planes().0
    }

    /// Longitude bits; it gets the extra bit on odd precisions.
    pub fn longitude_plane(&self) -> BitPlane {
        self.split_planes().1
    }

    /// Separates the interleaved bits into `(latitude, longitude)`.
    fn split_planes(&self) -> (BitPlane, BitPlane) {
        let mut latitude = BitPlane { value: 0, width: 0 };
        let mut longitude = BitPlane { value: 0, width: 0 };
        for index in 0..self.significant_bits() {
            let bit = (self.bits() >> (MAX_BIT_PRECISION - 1 - index)) & 1 == 1;
            if index % 2 == 0 {
                longitude.push(bit);
            } else {
                latitude.push(bit);
            }
        }
        (latitude, longitude)
    }

    /// Inverse of [`Self::split_planes`]; the widths must come from a split.
    fn join_planes(latitude: BitPlane, longitude: BitPlane) -> Self {
        let mut builder = CellBuilder::new();
        let (mut latitude_index, mut longitude_index) = (0, 0);
        for _ in 0..latitude.width + longitude.width {
            if builder.next_is_longitude() {
                builder.push_bit(longitude.bit(longitude_index));
                longitude_index += 1;
            } else {
                builder.push_bit(latitude.bit(latitude_index));
                latitude_index += 1;
            }
        }
        builder.finish()
    }

    fn shifted(&self, latitude_delta: i64, longitude_delta: i64) -> Self {
        let (latitude, longitude) = self.split_planes();
        Self::join_planes(latitude.step(latitude_delta), longitude.step(longitude_delta))
    }

    #[must_use]
    pub fn northern_neighbour(&self) -> Self {
        self.shifted(1, 0)
    }

    #[must_use]
    pub fn southern_neighbour(&self) -> Self {
        self.shifted(-1, 0)
    }

    #[must_use]
    pub fn eastern_neighbour(&self) -> Self {
        self.shifted(0, 1)
    }

    #[must_use]
    pub fn western_neighbour(&self) -> Self {
        self.shifted(0, -1)
    }

    /// Diagonals are two cardinal steps, north or south first.
    #[must_use]
    pub fn neighbour(&self, direction: Direction) -> Self {
        match direction {
            Direction::North => self.northern_neighbour(),
            Direction::NorthEast => self.northern_neighbour().eastern_neighbour(),
            Direction::East => self.eastern_neighbour(),
            Direction::SouthEast => self.southern_neighbour().eastern_neighbour(),
            Direction::South => self.southern_neighbour(),
            Direction::SouthWest => self.southern_neighbour().western_neighbour(),
            Direction::West => self.western_neighbour(),
            Direction::NorthWest => self.northern_neighbour().western_neighbour(),
        }
    }

    /// The eight surrounding cells: N, NE, E, SE, S, SW, W, NW.
    pub fn adjacent(&self) -> [GeoHash; 8] {
        let north = self.northern_neighbour();
        let east = self.eastern_neighbour();
        let south = self.southern_neighbour();
        let west = self.western_neighbour();
        [
            north,
            north.eastern_neighbour(),
            east,
            south.eastern_neighbour(),
            south,
            south.western_neighbour(),
            west,
            north.western_neighbour(),
        ]
    }

    /// This cell and its neighbours as a 3×3 block, row by row from the north-west.
    pub fn adjacent_box(&self) -> [GeoHash; 9] {
        let [n, ne, e, se, s, sw, w, nw] = self.adjacent();
        [nw, n, ne, w, *self, e, sw, s, se]
    }

    /// The 32 cells one character deeper, in alphabet order.
    ///
    /// `None` unless the hash is character aligned and shorter than twelve
    /// characters.
    pub fn child_hashes(&self) -> Option<[GeoHash; 32]> {
        let significant_bits = self.significant_bits();
        if significant_bits % BASE32_BITS != 0
            || significant_bits + BASE32_BITS > MAX_GEO_HASH_BITS
        {
            return None;
        }
        let child_bits = significant_bits + BASE32_BITS;
        let shift = MAX_BIT_PRECISION - child_bits;
        Some(std::array::from_fn(|code| {
            Self::rebuild(self.bits() | ((code as u64) << shift), child_bits)
        }))
    }

    /// The cell one character shallower.
    ///
    /// `None` for hashes of one character or less, so the root is never
    /// returned.
    pub fn parent_hash(&self) -> Option<GeoHash> {
        let significant_bits = self.significant_bits();
        if significant_bits < 2 * BASE32_BITS {
            return None;
        }
        let parent_bits = significant_bits - BASE32_BITS;
        Some(Self::rebuild(self.bits(), parent_bits))
    }
}
