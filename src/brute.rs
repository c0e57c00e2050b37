// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Brute-force oracle: compare every point with every other point.
//!
//! Θ(n²) distance evaluations, no trickery. Used as the correctness reference
//! for the divide-and-conquer variants, never on a hot path.

use crate::ClosestPair;
use crate::Error;
use crate::Point;
use crate::error::validate;
use crate::pair::Candidate;
use crate::pair::bound;
use crate::solver::ClosestPairSolver;
use crate::stats::SolveStats;

/// The O(n²) reference solver.
///
/// Pairs are enumerated with the outer index ascending and the inner index
/// ascending above it; only a strictly smaller distance replaces the current
/// best, so ties resolve to the first pair encountered.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl ClosestPairSolver for BruteForce {
    fn name(&self) -> &'static str {
        return "brute force";
    }

    fn closest_pair_with_stats(&self, points: &[Point]) -> Result<(ClosestPair, SolveStats), Error> {
        validate(points)?;
        let mut stats = SolveStats::default();
        let mut best: Option<Candidate> = None;

        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let distance = stats.measure(&points[i], &points[j]);
                if distance < bound(&best) {
                    best = Some(Candidate { a: i, b: j, distance });
                }
            }
        }

        return best
            .map(|c| (c.to_pair(points), stats))
            .ok_or(Error::TooFewPoints { len: points.len() });
    }
}
