//! Data structures for `closest-pair`

/// A point in the plane with finite coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The X coordinate of the point
    pub x: f64,
    /// The Y coordinate of the point
    pub y: f64,
}

/// Two points found to be closest to one another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    /// The first point of the pair
    pub p1: Point,
    /// The second point of the pair
    pub p2: Point,
}
