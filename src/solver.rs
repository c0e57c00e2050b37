// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! The solver trait shared by the oracle and every divide-and-conquer variant.
//!
//! All implementations satisfy the same contract, which enables:
//! - Differential testing against the brute-force oracle
//! - Benchmarking across variants
//! - Swapping variants behind the CLI

use std::fmt;
use std::str::FromStr;

use crate::ClosestPair;
use crate::Error;
use crate::Point;
use crate::brute::BruteForce;
use crate::driver;
use crate::driver::CrossCheck;
use crate::error::validate;
use crate::naive::NaiveDivideConquer;
use crate::point::sorted_by_x;
use crate::stats::SolveStats;
use crate::strip::StripDivideConquer;
use crate::window::WindowDivideConquer;
use crate::window::WindowPolicy;

/// Finds the closest pair of a point set.
///
/// For every input of at least two finite points the returned pair's
/// distance equals the minimum over all unordered pairs. Which pair is
/// returned on ties is implementation-specific.
pub trait ClosestPairSolver {
    /// Short human-readable name, used in reports and benchmarks.
    fn name(&self) -> &'static str;

    /// Solve, also returning the cost counters.
    fn closest_pair_with_stats(&self, points: &[Point]) -> Result<(ClosestPair, SolveStats), Error>;

    /// Solve.
    fn closest_pair(&self, points: &[Point]) -> Result<ClosestPair, Error> {
        return self.closest_pair_with_stats(points).map(|(pair, _)| pair);
    }
}

/// Shared entry point of the divide-and-conquer variants: validate, sort by
/// x, run the work-stack driver and resolve the winning candidate.
pub(crate) fn solve_divide_conquer<C: CrossCheck>(
    check: &C,
    points: &[Point],
) -> Result<(ClosestPair, SolveStats), Error> {
    validate(points)?;
    let xs = sorted_by_x(points);
    let mut stats = SolveStats::default();
    let best = driver::run(check, &xs, &mut stats);
    return best
        .map(|c| (c.to_pair(&xs), stats))
        .ok_or(Error::TooFewPoints { len: points.len() });
}

/// Names the available solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Brute,
    Naive,
    Strip,
    Window,
}

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::Brute, Variant::Naive, Variant::Strip, Variant::Window];

    /// The divide-and-conquer variants, i.e. everything but the oracle.
    pub const DIVIDE_CONQUER: [Variant; 3] = [Variant::Naive, Variant::Strip, Variant::Window];

    pub fn as_str(&self) -> &'static str {
        return match self {
            Variant::Brute => "brute",
            Variant::Naive => "naive",
            Variant::Strip => "strip",
            Variant::Window => "window",
        };
    }

    /// Build the solver for this variant. `policy` only affects `Window`.
    pub fn solver(&self, policy: WindowPolicy) -> Box<dyn ClosestPairSolver> {
        return match self {
            Variant::Brute => Box::new(BruteForce),
            Variant::Naive => Box::new(NaiveDivideConquer),
            Variant::Strip => Box::new(StripDivideConquer),
            Variant::Window => Box::new(WindowDivideConquer::new(policy)),
        };
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.as_str());
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Variant, String> {
        return Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown variant `{s}`"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.as_str().parse::<Variant>(), Ok(variant));
        }
        assert!("quadtree".parse::<Variant>().is_err());
    }

    #[test]
    fn every_variant_builds_a_named_solver() {
        let points = [Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(4.0, 4.0)];
        for variant in Variant::ALL {
            let solver = variant.solver(WindowPolicy::Guarded);
            assert!(!solver.name().is_empty());
            assert_eq!(solver.closest_pair(&points).unwrap().distance(), 1.0);
        }
    }

    #[test]
    fn divide_conquer_rejects_bad_input() {
        for variant in Variant::DIVIDE_CONQUER {
            let solver = variant.solver(WindowPolicy::Guarded);
            assert_eq!(
                solver.closest_pair(&[Point::new(0.0, 0.0)]),
                Err(Error::TooFewPoints { len: 1 })
            );
        }
    }
}
