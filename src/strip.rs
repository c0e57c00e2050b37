// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Strip-pruned divide and conquer.
//!
//! Same skeleton as the naive variant, but once the closer sub-result `best`
//! is known, any point whose horizontal distance to the splitting line is at
//! least `best` is dropped from the cross-check: a straddling pair is at least
//! as far apart as the sum of its endpoints' offsets from the line, so such a
//! point cannot be part of a strictly closer straddling pair.
//!
//! The survivors are still compared exhaustively, so adversarial inputs (for
//! example everything crowded against the line) remain quadratic. The window
//! variant removes that.

use crate::ClosestPair;
use crate::Error;
use crate::Point;
use crate::driver::CrossCheck;
use crate::naive::cross_exhaustive;
use crate::pair::Candidate;
use crate::pair::bound;
use crate::solver::ClosestPairSolver;
use crate::solver::solve_divide_conquer;
use crate::split::Split;
use crate::stats::SolveStats;

#[derive(Clone, Copy, Debug, Default)]
pub struct StripDivideConquer;

impl CrossCheck for StripDivideConquer {
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
        // The bound is fixed before the scan; a tighter one found mid-scan
        // would only prune more.
        let width = bound(&best);
        let near = |&i: &usize| split.offset(&xs[i]) < width;
        let left = (split.lo..split.mid).filter(near);
        let right = (split.mid..split.hi).filter(near);
        return cross_exhaustive(xs, left, right, best, stats);
    }
}

impl ClosestPairSolver for StripDivideConquer {
    fn name(&self) -> &'static str {
        return "strip-pruned divide and conquer";
    }

    fn closest_pair_with_stats(&self, points: &[Point]) -> Result<(ClosestPair, SolveStats), Error> {
        return solve_divide_conquer(self, points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NaiveDivideConquer;

    #[test]
    fn prunes_far_points() {
        // Two tight clusters far from the line: nothing survives the strip.
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.1),
            Point::new(100.0, 0.0),
            Point::new(100.0, 0.1),
        ];
        let (pair, stats) = StripDivideConquer.closest_pair_with_stats(&points).unwrap();
        assert!((pair.distance() - 0.1).abs() < 1e-12);
        assert_eq!(stats.distance_evals, 2);

        let (_, naive) = NaiveDivideConquer.closest_pair_with_stats(&points).unwrap();
        assert_eq!(naive.distance_evals, 2 + 4);
    }

    #[test]
    fn keeps_points_near_the_line() {
        let points = [
            Point::new(-10.0, 0.0),
            Point::new(-0.3, 0.0),
            Point::new(0.3, 0.0),
            Point::new(10.0, 0.0),
        ];
        let pair = StripDivideConquer.closest_pair(&points).unwrap();
        assert_eq!(pair, ClosestPair::new(Point::new(-0.3, 0.0), Point::new(0.3, 0.0)));
    }

    #[test]
    fn point_exactly_at_bound_is_pruned_safely() {
        // Offsets equal to best cannot produce a strictly closer pair.
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ];
        let pair = StripDivideConquer.closest_pair(&points).unwrap();
        assert_eq!(pair.distance(), 1.0);
    }
}
