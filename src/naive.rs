// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Naive divide and conquer.
//!
//! Split by a vertical line, solve both halves, then compare every left point
//! with every right point. Pairs within a half are covered by the half's own
//! solve and every straddling pair by the cross-check, so the three cases
//! cover all unordered pairs. The cross-check is still Θ(n²), so there is no
//! asymptotic gain over brute force; this is the stepping stone to the
//! pruned variants.

use crate::ClosestPair;
use crate::Error;
use crate::Point;
use crate::driver::CrossCheck;
use crate::pair::Candidate;
use crate::pair::bound;
use crate::solver::ClosestPairSolver;
use crate::solver::solve_divide_conquer;
use crate::split::Split;
use crate::stats::SolveStats;

#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveDivideConquer;

impl CrossCheck for NaiveDivideConquer {
    type View = ();

    fn root_view(&self, _xs: &[Point]) {}

    fn partition(&self, _view: &(), _split: &Split) -> ((), ()) {
        return ((), ());
    }

    fn cross(
        &self,
        xs: &[Point],
        split: &Split,
        _view: &(),
        best: Option<Candidate>,
        stats: &mut SolveStats,
    ) -> Option<Candidate> {
        let left = split.lo..split.mid;
        let right = split.mid..split.hi;
        return cross_exhaustive(xs, left, right, best, stats);
    }
}

/// Compare every index in `left` with every index in `right`, keeping the
/// first strictly closer pair found.
pub(crate) fn cross_exhaustive(
    xs: &[Point],
    left: impl Iterator<Item = usize> + Clone,
    right: impl Iterator<Item = usize> + Clone,
    mut best: Option<Candidate>,
    stats: &mut SolveStats,
) -> Option<Candidate> {
    for l in left {
        for r in right.clone() {
            let distance = stats.measure(&xs[l], &xs[r]);
            if distance < bound(&best) {
                best = Some(Candidate { a: l, b: r, distance });
            }
        }
    }
    return best;
}

impl ClosestPairSolver for NaiveDivideConquer {
    fn name(&self) -> &'static str {
        return "naive divide and conquer";
    }

    fn closest_pair_with_stats(&self, points: &[Point]) -> Result<(ClosestPair, SolveStats), Error> {
        return solve_divide_conquer(self, points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BruteForce;

    #[test]
    fn finds_pair_straddling_the_line() {
        // halves are {(0,0),(1,0)} and {(1.2,0),(9,0)}: the winner straddles
        let points = [
            Point::new(9.0, 0.0),
            Point::new(1.2, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
        ];
        let pair = NaiveDivideConquer.closest_pair(&points).unwrap();
        assert_eq!(pair, ClosestPair::new(Point::new(1.0, 0.0), Point::new(1.2, 0.0)));
    }

    #[test]
    fn agrees_with_oracle_on_a_grid() {
        let points: Vec<Point> = (0..7)
            .flat_map(|i| (0..5).map(move |j| Point::new(i as f64 * 1.5, j as f64 * 1.1)))
            .collect();
        let expected = BruteForce.closest_pair(&points).unwrap().distance();
        assert_eq!(NaiveDivideConquer.closest_pair(&points).unwrap().distance(), expected);
    }

    #[test]
    fn cross_check_is_exhaustive() {
        // 4 points split 2/2: one base pair per side plus 2 * 2 cross pairs
        let points: Vec<Point> = (0..4).map(|i| Point::new(i as f64, 0.0)).collect();
        let (_, stats) = NaiveDivideConquer.closest_pair_with_stats(&points).unwrap();
        assert_eq!(stats.distance_evals, 2 + 4);
    }
}
