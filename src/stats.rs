// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Cost counters collected while solving.
//!
//! The measure of interest for these algorithms is the number of distance
//! evaluations, so every solver routes its distance calls through
//! [`SolveStats::measure`].

use serde::Serialize;

use crate::Point;

/// Counters for a single solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    /// Number of point-to-point distance evaluations.
    pub distance_evals: u64,
    /// Number of combine steps (recursive cases) executed.
    pub combines: u64,
    /// High water mark of the explicit work stack.
    pub max_stack_depth: usize,
}

impl SolveStats {
    /// Distance between `a` and `b`, counted.
    #[inline]
    pub fn measure(&mut self, a: &Point, b: &Point) -> f64 {
        self.distance_evals += 1;
        return a.distance(b);
    }

    #[inline]
    pub(crate) fn observe_depth(&mut self, depth: usize) {
        self.max_stack_depth = self.max_stack_depth.max(depth);
    }
}
