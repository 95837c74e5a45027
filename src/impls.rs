//! Implementations for structs within `models.rs`

use crate::errors::ClosestPairError;
use crate::models::{Pair, Point};
use crate::utils::geometry;
use std::fmt;

impl Point {
    /// Creates a new point with the given coordinates
    ///
    /// The coordinates are trusted to be finite. Use [`Point::try_new`] for
    /// values coming from outside the program.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a new point, rejecting NaN and infinite coordinates
    pub fn try_new(x: f64, y: f64) -> Result<Self, ClosestPairError> {
        let point = Self::new(x, y);

        if point.is_finite() {
            Ok(point)
        } else {
            Err(ClosestPairError::NonFiniteCoordinate { x, y })
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        geometry::distance(self, other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Pair {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Distance between the two points of the pair
    pub fn distance(&self) -> f64 {
        self.p1.distance(&self.p2)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.p1 == point || self.p2 == point
    }

    /// Compares two pairs ignoring the order of their points
    pub fn same_points(&self, other: &Pair) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} <-> {}", self.p1, self.p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_finite() {
        assert_eq!(Point::try_new(1.5, -2.0), Ok(Point::new(1.5, -2.0)));
    }

    #[test]
    fn test_try_new_rejects_nan_and_infinity() {
        assert!(matches!(
            Point::try_new(f64::NAN, 0.0),
            Err(ClosestPairError::NonFiniteCoordinate { .. })
        ));
        assert!(Point::try_new(0.0, f64::INFINITY).is_err());
        assert!(Point::try_new(f64::NEG_INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_from_tuple() {
        let p: Point = (3.0, 4.0).into();
        assert_eq!(p, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_display() {
        let pair = Pair::new(Point::new(0.0, 0.0), Point::new(0.0, 0.5));
        assert_eq!(pair.to_string(), "(0, 0) <-> (0, 0.5)");
    }

    #[test]
    fn test_pair_distance() {
        let pair = Pair::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(pair.distance(), 5.0);
    }

    #[test]
    fn test_same_points_ignores_order() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(2.0, 2.0);
        assert!(Pair::new(a, b).same_points(&Pair::new(b, a)));
        assert!(!Pair::new(a, b).same_points(&Pair::new(a, a)));
        assert!(Pair::new(a, b).contains(b));
    }
}
