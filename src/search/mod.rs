//! Closest pair searches
//!
//! Both algorithms share the same contract: they read a slice of points,
//! never reorder it, and report the two points with the smallest
//! Euclidean distance between them.

pub mod divide;
pub mod exhaustive;

use crate::errors::ClosestPairError;
use crate::models::{Pair, Point};
use std::sync::atomic::{AtomicU64, Ordering};

/// A pair together with the distance it was selected by
///
/// Returned by the recursive solver and the base case. The public entry
/// points only hand out the [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Solution {
    pub pair: Pair,
    pub distance: f64,
}

impl Solution {
    pub fn between(p1: Point, p2: Point) -> Self {
        Self {
            pair: Pair::new(p1, p2),
            distance: p1.distance(&p2),
        }
    }

    /// Keeps `self` unless `other` is strictly closer
    pub fn closer(self, other: Solution) -> Solution {
        if other.distance < self.distance {
            other
        } else {
            self
        }
    }
}

/// Receives the number of distance evaluations a search performs
pub trait Tally: Sync {
    fn record(&self, comparisons: u64);
}

impl Tally for () {
    #[inline(always)]
    fn record(&self, _: u64) {}
}

/// Counts distance evaluations, safe to share across rayon workers
#[derive(Debug, Default)]
pub struct Comparisons {
    count: AtomicU64,
}

impl Comparisons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::Relaxed);
    }
}

impl Tally for Comparisons {
    fn record(&self, comparisons: u64) {
        self.count.fetch_add(comparisons, Ordering::Relaxed);
    }
}

/// Rejects the first point with a NaN or infinite coordinate
pub fn validate(points: &[Point]) -> Result<(), ClosestPairError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(ClosestPairError::InvalidCoordinate {
            index,
            x: points[index].x,
            y: points[index].y,
        }),
        None => Ok(()),
    }
}
