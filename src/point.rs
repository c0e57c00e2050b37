// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! The 2D point value type.
//!
//! Points carry no identity beyond their coordinates: two points with equal
//! coordinates are interchangeable, and solvers work on indices into sorted
//! copies so that duplicates are never confused with one another.

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A point in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Point {
        return Point { x, y };
    }

    /// Euclidean distance to `other`.
    ///
    /// Uses `hypot` so that large coordinates do not overflow the
    /// intermediate squares.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        return (self.x - other.x).hypot(self.y - other.y);
    }

    /// True when both coordinates are finite (not NaN, not infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        return self.x.is_finite() && self.y.is_finite();
    }

    /// Total order by x, then y.
    #[inline]
    pub fn cmp_by_x(&self, other: &Point) -> Ordering {
        return self.x.total_cmp(&other.x).then(self.y.total_cmp(&other.y));
    }

    /// Total order by y, then x.
    #[inline]
    pub fn cmp_by_y(&self, other: &Point) -> Ordering {
        return self.y.total_cmp(&other.y).then(self.x.total_cmp(&other.x));
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        return Point::new(x, y);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "({}, {})", self.x, self.y);
    }
}

/// Copy `points` into a new vector sorted by x (ties by y).
///
/// The sort is stable, so duplicates keep their input order.
pub fn sorted_by_x(points: &[Point]) -> Vec<Point> {
    let mut xs = points.to_vec();
    xs.sort_by(Point::cmp_by_x);
    return xs;
}
