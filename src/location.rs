//! The coordinate boundary of the crate.
//!
//! Anything that can report a latitude and a longitude can be encoded. Corner
//! and center accessors hand back `geo::Point` values, where `x` is the
//! longitude and `y` the latitude.

use crate::config::CoordinatePolicy;
use crate::error::{GeoHashError, Result};
use geo::{Coord, Point};

pub const LATITUDE_MAX_ABS: f64 = 90.0;
pub const LONGITUDE_MAX_ABS: f64 = 180.0;

/// A source of a `(latitude, longitude)` pair in degrees.
pub trait Location {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

impl Location for Point<f64> {
    fn latitude(&self) -> f64 {
        self.y()
    }

    fn longitude(&self) -> f64 {
        self.x()
    }
}

impl Location for Coord<f64> {
    fn latitude(&self) -> f64 {
        self.y
    }

    fn longitude(&self) -> f64 {
        self.x
    }
}

/// Tuples are read as `(latitude, longitude)`.
impl Location for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }

    fn longitude(&self) -> f64 {
        self.1
    }
}

impl<T: Location + ?Sized> Location for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

/// Builds a point from latitude and longitude, in that order.
///
/// # Examples
///
/// ```
/// use geocell::{Location, location};
///
/// let point = location(53.2, 45.0);
/// assert_eq!(point.x(), 45.0);
/// assert_eq!(point.latitude(), 53.2);
/// ```
pub fn location(latitude: f64, longitude: f64) -> Point<f64> {
    Point::new(longitude, latitude)
}

/// Checks a coordinate against the geographic range.
///
/// Under [`CoordinatePolicy::Lenient`] a bad value is only logged, since the
/// bisection still produces a (degenerate) cell for it. Under
/// [`CoordinatePolicy::Strict`] it is rejected.
pub fn check_coordinate(latitude: f64, longitude: f64, policy: CoordinatePolicy) -> Result<()> {
    let problem = if !latitude.is_finite() || !longitude.is_finite() {
        Some(format!(
            "Coordinates must be finite, got: ({}, {})",
            latitude, longitude
        ))
    } else if !(-LATITUDE_MAX_ABS..=LATITUDE_MAX_ABS).contains(&latitude) {
        Some(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            latitude
        ))
    } else if !(-LONGITUDE_MAX_ABS..=LONGITUDE_MAX_ABS).contains(&longitude) {
        Some(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            longitude
        ))
    } else {
        None
    };

    match (problem, policy) {
        (None, _) => Ok(()),
        (Some(message), CoordinatePolicy::Strict) => {
            Err(GeoHashError::CoordinateOutOfRange(message))
        }
        (Some(message), CoordinatePolicy::Lenient) => {
            log::warn!("Encoding coordinate outside the geographic range: {}", message);
            Ok(())
        }
    }
}
