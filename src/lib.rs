//! Closest pair of points in the plane
//!
//! Two searches with the same contract:
//! * [`exhaustive::closest_pair`] compares every pair, O(n²)
//! * [`divide::closest_pair`] splits by x and merges across a band, O(n log n)

pub mod choices;
pub mod config;
pub mod errors;
pub mod harness;
pub mod impls;
pub mod models;
pub mod search;
pub mod utils;

pub use errors::ClosestPairError;
pub use models::{Pair, Point};
pub use search::{divide, exhaustive, Comparisons, Tally};
