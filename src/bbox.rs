use crate::location::{Location, location};
use geo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle in latitude/longitude space.
///
/// The constructor sorts each axis independently, so the two corners can be
/// given in any order and `min <= max` always holds. Equality is exact,
/// field by field.
///
/// # Examples
///
/// ```
/// use geocell::{BoundingBox, location};
///
/// let bbox = BoundingBox::new(location(10.0, 11.0), location(20.0, 21.0));
/// assert_eq!(bbox.top_left(), location(20.0, 11.0));
/// assert_eq!(bbox.bottom_right(), location(10.0, 21.0));
/// assert!(bbox.contains(&location(15.0, 16.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BoundingBoxRepr")]
pub struct BoundingBox {
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

/// Wire form; routed through [`BoundingBox::from_ranges`] so a deserialized
/// box is sorted like a constructed one.
#[derive(Deserialize)]
struct BoundingBoxRepr {
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
}

impl From<BoundingBoxRepr> for BoundingBox {
    fn from(repr: BoundingBoxRepr) -> Self {
        Self::from_ranges(
            repr.min_latitude,
            repr.max_latitude,
            repr.min_longitude,
            repr.max_longitude,
        )
    }
}

impl BoundingBox {
    /// Create a bounding box spanning two arbitrary points.
    pub fn new(p1: impl Location, p2: impl Location) -> Self {
        Self::from_ranges(
            p1.latitude(),
            p2.latitude(),
            p1.longitude(),
            p2.longitude(),
        )
    }

    /// Create a bounding box from one latitude pair and one longitude pair.
    pub fn from_ranges(latitude1: f64, latitude2: f64, longitude1: f64, longitude2: f64) -> Self {
        Self {
            min_latitude: latitude1.min(latitude2),
            max_latitude: latitude1.max(latitude2),
            min_longitude: longitude1.min(longitude2),
            max_longitude: longitude1.max(longitude2),
        }
    }

    pub fn top_left(&self) -> Point<f64> {
        location(self.max_latitude, self.min_longitude)
    }

    pub fn top_right(&self) -> Point<f64> {
        location(self.max_latitude, self.max_longitude)
    }

    pub fn bottom_left(&self) -> Point<f64> {
        location(self.min_latitude, self.min_longitude)
    }

    pub fn bottom_right(&self) -> Point<f64> {
        location(self.min_latitude, self.max_longitude)
    }

    /// Get the center point of the bounding box.
    pub fn center_point(&self) -> Point<f64> {
        location(
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }

    /// Check if a point lies within the box, edges included.
    pub fn contains(&self, point: &impl Location) -> bool {
        point.latitude() >= self.min_latitude
            && point.longitude() >= self.min_longitude
            && point.latitude() <= self.max_latitude
            && point.longitude() <= self.max_longitude
    }

    /// Check if this box overlaps another. Touching edges count.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(other.min_longitude > self.max_longitude
            || other.max_longitude < self.min_longitude
            || other.min_latitude > self.max_latitude
            || other.max_latitude < self.min_latitude)
    }

    /// Check if `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains(&other.top_left()) && self.contains(&other.bottom_right())
    }

    pub fn latitude_size(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    pub fn longitude_size(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    pub fn min_latitude(&self) -> f64 {
        self.min_latitude
    }

    pub fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    pub fn min_longitude(&self) -> f64 {
        self.min_longitude
    }

    pub fn max_longitude(&self) -> f64 {
        self.max_longitude
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        Rect::new(
            geo::coord! { x: bbox.min_longitude, y: bbox.min_latitude },
            geo::coord! { x: bbox.max_longitude, y: bbox.max_latitude },
        )
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self::new(rect.min(), rect.max())
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.max_latitude, self.min_longitude, self.min_latitude, self.max_longitude
        )
    }
}
