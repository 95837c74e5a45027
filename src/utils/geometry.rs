use crate::models::Point;

/// Euclidean distance between two points
///
/// `hypot` keeps large coordinate differences from overflowing, and is
/// evaluated the same way every time so a pair measured in a half and again
/// in the band yields the same bits.
pub fn distance(a: &Point, b: &Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
