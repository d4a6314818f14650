//! Error types for geohash encoding, decoding and cell navigation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoHashError {
    /// A requested character precision or paired-text length is not usable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input would need more than the 60 bits a geohash can carry.
    #[error("Precision exceeded: {0}")]
    PrecisionExceeded(String),

    #[error("Invalid geohash character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Text can only be rendered when the bit count is a multiple of five.
    #[error("Cannot render a geohash with {significant_bits} significant bits as base32")]
    NotBase32Aligned { significant_bits: u8 },

    #[error("Hashes have different precisions: {top_left} and {bottom_right} bits")]
    PrecisionMismatch { top_left: u8, bottom_right: u8 },

    /// Only raised when the codec runs with a strict coordinate policy.
    #[error("Coordinate out of range: {0}")]
    CoordinateOutOfRange(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GeoHashError>;
