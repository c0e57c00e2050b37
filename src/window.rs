// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Bounded-window divide and conquer: the Θ(n log n) variant.
//!
//! Alongside the x-sorted run, every subproblem carries a view of the same
//! points sorted by y. Because every split cuts the x-sorted run into a
//! prefix and a suffix, a point's side is decided by its index alone, and the
//! y-view is partitioned in one stable pass without re-sorting.
//!
//! After the halves are solved, the strip is the part of the y-view within
//! `best` of the line. Scanning the strip in y order, each point only needs
//! to be compared against a bounded number of followers: inside a
//! `best × 2·best` rectangle straddling the line, points on the same side are
//! pairwise at least `best` apart, so only a constant number fit. That turns
//! the cross-check into Θ(n) per level.
//!
//! # Window policy
//!
//! How "a bounded number of followers" is decided is a [`WindowPolicy`]:
//!
//! - [`WindowPolicy::Guarded`] (default) keeps scanning followers while their
//!   y-distance is below the current best and stops at the first one that is
//!   not. The packing argument bounds how many followers pass the guard, and
//!   correctness does not depend on the exact constant.
//! - [`WindowPolicy::Fixed`] compares each strip point with the next `k - 1`
//!   strip points regardless of their y-distance. `Fixed(6)` is the classic
//!   positional window, scanned per point rather than as all pairs inside
//!   sliding blocks of six. Whether a fixed window is large enough depends on the
//!   packing bound being right for every configuration; `Fixed(2)` is
//!   demonstrably too small (see the tests).

use std::fmt;
use std::str::FromStr;

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

/// How far each strip point looks ahead in y order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowPolicy {
    /// Compare with followers while their y-distance is below the best
    /// distance so far.
    #[default]
    Guarded,
    /// Compare with the next `k - 1` strip points (a window of `k` points),
    /// without a y-distance check.
    Fixed(usize),
}

impl WindowPolicy {
    /// The classic positional window: each point against its next five.
    pub const CLASSIC: WindowPolicy = WindowPolicy::Fixed(6);
}

impl fmt::Display for WindowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            WindowPolicy::Guarded => f.write_str("guarded"),
            WindowPolicy::Fixed(k) => write!(f, "fixed:{k}"),
        };
    }
}

impl FromStr for WindowPolicy {
    type Err = String;

    /// Parses `guarded` or `fixed:<k>` with `k >= 2`.
    fn from_str(s: &str) -> Result<WindowPolicy, String> {
        if s == "guarded" {
            return Ok(WindowPolicy::Guarded);
        }
        let Some(k) = s.strip_prefix("fixed:") else {
            return Err(format!("unknown window policy `{s}`"));
        };
        return match k.parse::<usize>() {
            Ok(k) if k >= 2 => Ok(WindowPolicy::Fixed(k)),
            _ => Err(format!("window size must be an integer >= 2, got `{k}`")),
        };
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowDivideConquer {
    pub policy: WindowPolicy,
}

impl WindowDivideConquer {
    pub fn new(policy: WindowPolicy) -> WindowDivideConquer {
        return WindowDivideConquer { policy };
    }
}

impl CrossCheck for WindowDivideConquer {
    /// Indices into the x-sorted run, ordered by y (ties by x).
    type View = Vec<usize>;

    fn root_view(&self, xs: &[Point]) -> Vec<usize> {
        let mut ys: Vec<usize> = (0..xs.len()).collect();
        ys.sort_by(|&a, &b| xs[a].cmp_by_y(&xs[b]));
        return ys;
    }

    fn partition(&self, view: &Vec<usize>, split: &Split) -> (Vec<usize>, Vec<usize>) {
        return view.iter().partition(|&&i| i < split.mid);
    }

    fn cross(
        &self,
        xs: &[Point],
        split: &Split,
        view: &Vec<usize>,
        mut best: Option<Candidate>,
        stats: &mut SolveStats,
    ) -> Option<Candidate> {
        let width = bound(&best);
        let strip: Vec<usize> = view
            .iter()
            .copied()
            .filter(|&i| split.offset(&xs[i]) < width)
            .collect();

        for (s, &i) in strip.iter().enumerate() {
            let followers = &strip[s + 1..];
            let followers = match self.policy {
                WindowPolicy::Guarded => followers,
                WindowPolicy::Fixed(k) => &followers[..followers.len().min(k.saturating_sub(1))],
            };
            for &j in followers {
                let current = bound(&best);
                if self.policy == WindowPolicy::Guarded && xs[j].y - xs[i].y >= current {
                    break;
                }
                let distance = stats.measure(&xs[i], &xs[j]);
                if distance < current {
                    best = Some(Candidate { a: i.min(j), b: i.max(j), distance });
                }
            }
        }
        return best;
    }
}

impl ClosestPairSolver for WindowDivideConquer {
    fn name(&self) -> &'static str {
        return match self.policy {
            WindowPolicy::Guarded => "window divide and conquer",
            WindowPolicy::Fixed(_) => "fixed-window divide and conquer",
        };
    }

    fn closest_pair_with_stats(&self, points: &[Point]) -> Result<(ClosestPair, SolveStats), Error> {
        return solve_divide_conquer(self, points);
    }
}
