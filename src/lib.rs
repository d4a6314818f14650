//! Geohash encoding, decoding and cell navigation.
//!
//! ```rust
//! use geocell::{GeoHash, TwoGeoHashBoundingBox, location};
//!
//! let hash = GeoHash::from_coordinate(53.2030476, 45.0324948, 9)?;
//! assert_eq!(hash.to_text()?, "v12n8trdj");
//! assert!(hash.contains(&location(53.2030476, 45.0324948)));
//!
//! let north = hash.northern_neighbour();
//! assert_eq!(north.to_text()?, "v12n8trdm");
//! assert_eq!(hash.next_cell().to_text()?, "v12n8trdk");
//!
//! let region = TwoGeoHashBoundingBox::from_text("v12n8jp")?;
//! assert_eq!(region.to_text()?, "v12n8jppv12n8jpb");
//! # Ok::<(), geocell::GeoHashError>(())
//! ```

pub mod bbox;
mod bisect;
pub mod codec;
pub mod config;
pub mod error;
pub mod geohash;
pub mod location;
pub mod neighbors;
pub mod two_hash;

pub use bbox::BoundingBox;
pub use codec::GeoHashCodec;
pub use config::{CodecConfig, CoordinatePolicy};
pub use error::{GeoHashError, Result};
pub use crate::geohash::{BASE32, GeoHash, MAX_CHARACTER_PRECISION, MAX_GEO_HASH_BITS};
pub use location::{Location, location};
pub use neighbors::{BitPlane, Direction};
pub use two_hash::TwoGeoHashBoundingBox;

pub use geo::Point;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{BoundingBox, GeoHash, GeoHashError, Result, TwoGeoHashBoundingBox};

    pub use crate::{CodecConfig, CoordinatePolicy, GeoHashCodec};

    pub use crate::{Direction, Location, location};

    pub use geo::Point;
}
