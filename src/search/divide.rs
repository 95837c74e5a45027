//! Divide and conquer closest pair, O(n log n)
//!
//! The points are sorted by x once. Each recursive step splits the sorted
//! slice at its middle index, solves both halves and then looks for a
//! closer pair straddling the split inside a band around the midline.

use super::{exhaustive, validate, Comparisons, Solution, Tally};
use crate::errors::ClosestPairError;
use crate::models::{Pair, Point};

/// Slices at least this long recurse into both halves in parallel
pub const PARALLEL_CUTOFF: usize = 4096;

/// Slices this small are solved by the exhaustive scan
const BASE_CASE: usize = 3;

/// Band points compared against each band point, in y order
const BAND_NEIGHBOURS: usize = 7;

const SEQUENTIAL: usize = usize::MAX;

/// Finds the closest pair in O(n log n)
///
/// Returns `Ok(None)` for fewer than 2 points. The input slice is left
/// untouched; sorting happens on a private copy.
///
/// # Errors
/// [`ClosestPairError::InvalidCoordinate`] if any point is not finite
///
/// # Example
/// ```
/// use closest_pair::{divide, Pair, Point};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(0.0, 0.5),
///     Point::new(10.0, 10.0),
/// ];
/// let pair = divide::closest_pair(&points).unwrap().unwrap();
///
/// assert!(pair.same_points(&Pair::new(Point::new(0.0, 0.0), Point::new(0.0, 0.5))));
/// ```
pub fn closest_pair(points: &[Point]) -> Result<Option<Pair>, ClosestPairError> {
    search(points, &(), SEQUENTIAL)
}

/// Same as [`closest_pair`], forking both halves onto the rayon pool while
/// a slice holds at least [`PARALLEL_CUTOFF`] points
///
/// The merge stays sequential so the result is identical to the
/// sequential search.
pub fn closest_pair_parallel(points: &[Point]) -> Result<Option<Pair>, ClosestPairError> {
    search(points, &(), PARALLEL_CUTOFF)
}

/// Same as [`closest_pair`], recording every distance evaluation in `tally`
pub fn closest_pair_counted(
    points: &[Point],
    tally: &Comparisons,
) -> Result<Option<Pair>, ClosestPairError> {
    search(points, tally, SEQUENTIAL)
}

fn search<T: Tally>(
    points: &[Point],
    tally: &T,
    cutoff: usize,
) -> Result<Option<Pair>, ClosestPairError> {
    validate(points)?;
    tracing::debug!(
        points = points.len(),
        parallel = cutoff != SEQUENTIAL,
        "divide and conquer search"
    );

    if points.len() < 2 {
        return Ok(None);
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    Ok(solve(&sorted, tally, cutoff).map(|solution| solution.pair))
}

/// Solves a slice already sorted by x, `None` below 2 points
fn solve<T: Tally>(sorted: &[Point], tally: &T, cutoff: usize) -> Option<Solution> {
    if sorted.len() <= BASE_CASE {
        return exhaustive::solve(sorted, tally);
    }

    let (left, right) = sorted.split_at(sorted.len() / 2);

    // Average of the last point on the left and the first on the right,
    // halved first so it stays finite near f64::MAX.
    let midline = left.last()?.x / 2.0 + right.first()?.x / 2.0;

    let (left_best, right_best) = if sorted.len() >= cutoff {
        rayon::join(
            || solve(left, tally, cutoff),
            || solve(right, tally, cutoff),
        )
    } else {
        (solve(left, tally, cutoff), solve(right, tally, cutoff))
    };

    let best = left_best?.closer(right_best?);

    Some(merge(sorted, midline, best, tally))
}

/// Looks for a pair across the midline closer than `best`
fn merge<T: Tally>(sorted: &[Point], midline: f64, best: Solution, tally: &T) -> Solution {
    let band_range = (midline - best.distance)..=(midline + best.distance);

    let mut band: Vec<Point> = sorted
        .iter()
        .copied()
        .filter(|p| band_range.contains(&p.x))
        .collect();
    band.sort_by(|a, b| a.y.total_cmp(&b.y));

    let mut best = best;
    let mut comparisons = 0;

    for (i, &p) in band.iter().enumerate() {
        for &q in band[i + 1..].iter().take(BAND_NEIGHBOURS) {
            if q.y - p.y >= best.distance {
                break;
            }

            comparisons += 1;
            let candidate = Solution::between(p, q);
            if candidate.distance < best.distance {
                tracing::trace!(
                    midline,
                    distance = candidate.distance,
                    "closer pair across midline"
                );
                best = candidate;
            }
        }
    }

    tally.record(comparisons);
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn random_points(n: usize, seed: u64) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                Point::new(
                    rng.random_range(0.0..=1000.0),
                    rng.random_range(0.0..=1000.0),
                )
            })
            .collect()
    }

    fn distance_of(points: &[Point]) -> f64 {
        closest_pair(points).unwrap().unwrap().distance()
    }

    #[test]
    fn test_concrete_scenario() {
        let points = pts(&[(0.0, 0.0), (3.0, 4.0), (0.0, 0.5), (10.0, 10.0)]);
        let pair = closest_pair(&points).unwrap().unwrap();

        assert!(pair.same_points(&Pair::new(Point::new(0.0, 0.0), Point::new(0.0, 0.5))));
        assert_eq!(pair.distance(), 0.5);
    }

    #[test]
    fn test_collinear_diagonal() {
        let points = pts(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let pair = closest_pair(&points).unwrap().unwrap();

        assert!((pair.distance() - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!(pair.contains(Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_empty_and_singleton_have_no_pair() {
        assert_eq!(closest_pair(&[]), Ok(None));
        assert_eq!(closest_pair(&[Point::new(1.0, 2.0)]), Ok(None));
        assert_eq!(closest_pair_parallel(&[]), Ok(None));
    }

    #[test]
    fn test_rejects_non_finite() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, f64::NEG_INFINITY)]);
        assert!(matches!(
            closest_pair(&points),
            Err(ClosestPairError::InvalidCoordinate { index: 2, .. })
        ));

        // Checked before the size test.
        assert!(closest_pair(&[Point::new(f64::NAN, 0.0)]).is_err());
    }

    #[test]
    fn test_duplicates_are_found() {
        let mut points = random_points(200, 7);
        points.push(points[42]);

        let pair = closest_pair(&points).unwrap().unwrap();
        assert_eq!(pair.distance(), 0.0);
        assert_eq!(pair.p1, points[42]);
    }

    #[test]
    fn test_all_points_identical() {
        let points = vec![Point::new(3.0, 3.0); 50];
        assert_eq!(distance_of(&points), 0.0);
    }

    #[test]
    fn test_vertical_line() {
        let points: Vec<Point> = (0..64)
            .map(|i| Point::new(5.0, (i * i) as f64))
            .collect();
        assert_eq!(distance_of(&points), 1.0);
    }

    #[test]
    fn test_horizontal_line() {
        let points: Vec<Point> = [9.0, 1.0, 4.0, 16.0, 0.0, 25.0, 36.0, 2.5]
            .iter()
            .map(|&x| Point::new(x, -1.0))
            .collect();
        assert_eq!(distance_of(&points), 1.0);
    }

    #[test]
    fn test_grid_with_many_ties() {
        let points: Vec<Point> = (0..20)
            .flat_map(|x| (0..20).map(move |y| Point::new(x as f64 * 2.0, y as f64 * 2.0)))
            .collect();
        assert_eq!(distance_of(&points), 2.0);
    }

    #[test]
    fn test_pair_straddling_midline() {
        // Left half (0,0),(4.9,5); right half (5.1,5.1),(10,0); midline 5.0.
        let points = pts(&[(10.0, 0.0), (5.1, 5.1), (0.0, 0.0), (4.9, 5.0)]);
        let pair = closest_pair(&points).unwrap().unwrap();

        assert!(pair.same_points(&Pair::new(Point::new(4.9, 5.0), Point::new(5.1, 5.1))));
    }

    #[test]
    fn test_huge_equal_x_keeps_band() {
        let points = pts(&[(1.7e308, 0.0), (1.7e308, 10.0), (1.7e308, 11.0), (1.7e308, 20.0)]);
        let expected = exhaustive::closest_pair(&points).unwrap().distance();

        assert_eq!(expected, 1.0);
        assert_eq!(distance_of(&points), expected);
    }

    #[test]
    fn test_huge_x_pair_across_midline() {
        // The two boundary x values sum past f64::MAX.
        let points = pts(&[(1.65e308, 0.0), (1.7e308, 50.0), (1.7e308, 51.0), (1.75e308, 0.0)]);
        let pair = closest_pair(&points).unwrap().unwrap();

        assert!(pair.same_points(&Pair::new(Point::new(1.7e308, 50.0), Point::new(1.7e308, 51.0))));
    }

    #[test]
    fn test_large_coordinates_pick_true_closest() {
        let points = pts(&[(0.0, 0.0), (3e200, 0.0), (4e200, 0.0), (9e200, 0.0)]);
        let pair = closest_pair(&points).unwrap().unwrap();

        assert!(pair.same_points(&Pair::new(Point::new(3e200, 0.0), Point::new(4e200, 0.0))));
        assert!(pair.distance().is_finite());
    }

    #[test]
    fn test_input_is_not_reordered() {
        let points = random_points(100, 3);
        let before = points.clone();
        closest_pair(&points).unwrap();
        assert_eq!(points, before);
    }

    #[test]
    fn test_matches_exhaustive() {
        for seed in 0..20 {
            let points = random_points(2 + seed as usize * 13, seed);
            let expected = exhaustive::closest_pair(&points).unwrap().distance();
            assert_eq!(distance_of(&points), expected, "seed {seed}");
        }
    }

    #[test]
    fn test_permutation_invariance() {
        let mut points = random_points(500, 11);
        let expected = distance_of(&points);
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..5 {
            points.shuffle(&mut rng);
            assert_eq!(distance_of(&points), expected);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let points = random_points(20_000, 5);
        assert_eq!(
            closest_pair_parallel(&points).unwrap(),
            closest_pair(&points).unwrap()
        );
    }

    #[test]
    fn comparisons_grow_slower_than_exhaustive() {
        let ratio = |n: usize| {
            let tally = Comparisons::new();
            closest_pair_counted(&random_points(n, n as u64), &tally).unwrap();
            let all_pairs = (n * (n - 1) / 2) as f64;
            all_pairs / tally.count() as f64
        };

        let small = ratio(1000);
        let large = ratio(4000);

        assert!(small > 10.0, "ratio at 1000 points was {small}");
        assert!(large > small, "ratio did not grow: {small} then {large}");
    }
}
