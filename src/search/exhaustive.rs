//! Brute force closest pair, O(n²)

use super::{validate, Comparisons, Solution, Tally};
use crate::errors::ClosestPairError;
use crate::models::{Pair, Point};

/// Finds the closest pair by comparing every unordered pair exactly once
///
/// Pairs are visited in index order `(0, 1), (0, 2), ..., (n - 2, n - 1)`
/// and ties keep the first pair seen.
///
/// # Errors
/// * [`ClosestPairError::InvalidCoordinate`] if any point is not finite
/// * [`ClosestPairError::InsufficientInput`] if fewer than 2 points are given
pub fn closest_pair(points: &[Point]) -> Result<Pair, ClosestPairError> {
    search(points, &())
}

/// Same as [`closest_pair`], recording every distance evaluation in `tally`
pub fn closest_pair_counted(
    points: &[Point],
    tally: &Comparisons,
) -> Result<Pair, ClosestPairError> {
    search(points, tally)
}

fn search<T: Tally>(points: &[Point], tally: &T) -> Result<Pair, ClosestPairError> {
    validate(points)?;
    tracing::debug!(points = points.len(), "exhaustive search");

    solve(points, tally)
        .map(|solution| solution.pair)
        .ok_or(ClosestPairError::InsufficientInput { len: points.len() })
}

/// Exhaustive scan that keeps the winning distance, `None` below 2 points
pub(crate) fn solve<T: Tally>(points: &[Point], tally: &T) -> Option<Solution> {
    let mut best: Option<Solution> = None;

    for (i, &p1) in points.iter().enumerate() {
        for &p2 in &points[i + 1..] {
            let candidate = Solution::between(p1, p2);
            best = Some(match best {
                Some(current) => current.closer(candidate),
                None => candidate,
            });
        }
    }

    let n = points.len() as u64;
    tally.record(n * n.saturating_sub(1) / 2);

    best
}
