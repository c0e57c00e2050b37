// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Explicit work-stack driver for the divide-and-conquer solvers.
//!
//! All three divide-and-conquer variants share one skeleton: split the
//! x-sorted run, solve both halves, keep the closer sub-result, then look for
//! a closer pair straddling the line. They differ only in that last step (and
//! in whatever per-run view they need for it), which is captured by the
//! [`CrossCheck`] trait.
//!
//! The recursion is unrolled onto a heap-allocated stack of frames so the
//! depth of the split tree is bounded by memory rather than by the thread's
//! call stack:
//!
//! ```text
//! Descend(lo..hi)  ── n < 2 ──▶ push None
//!                  ── n = 2 ──▶ push Some(pair)
//!                  ── n > 2 ──▶ Combine(split), Descend(right), Descend(left)
//! Combine(split)   ── pop right, pop left ──▶ push cross(closer(left, right))
//! ```

use crate::Point;
use crate::pair::Candidate;
use crate::pair::closer;
use crate::split::Split;
use crate::stats::SolveStats;

/// The variant-specific half of a divide-and-conquer solver.
pub(crate) trait CrossCheck {
    /// Per-run data carried alongside the x-sorted run (e.g. a y-sorted view).
    type View;

    /// View of the whole x-sorted slice.
    fn root_view(&self, xs: &[Point]) -> Self::View;

    /// Views of the two halves of `split`, derived from the parent's view.
    fn partition(&self, view: &Self::View, split: &Split) -> (Self::View, Self::View);

    /// Improve `best` with pairs that straddle `split`.
    fn cross(
        &self,
        xs: &[Point],
        split: &Split,
        view: &Self::View,
        best: Option<Candidate>,
        stats: &mut SolveStats,
    ) -> Option<Candidate>;
}

enum Frame<V> {
    Descend { lo: usize, hi: usize, view: V },
    Combine { split: Split, view: V },
}

/// Solve the closest pair of the x-sorted slice `xs`.
///
/// Returns `None` only when `xs` has fewer than two points.
pub(crate) fn run<C: CrossCheck>(
    check: &C,
    xs: &[Point],
    stats: &mut SolveStats,
) -> Option<Candidate> {
    let mut frames = vec![Frame::Descend { lo: 0, hi: xs.len(), view: check.root_view(xs) }];
    let mut results: Vec<Option<Candidate>> = Vec::new();

    while let Some(frame) = frames.pop() {
        stats.observe_depth(frames.len() + 1);
        match frame {
            Frame::Descend { lo, hi, view } => match hi - lo {
                0 | 1 => results.push(None),
                2 => {
                    let distance = stats.measure(&xs[lo], &xs[lo + 1]);
                    results.push(Some(Candidate { a: lo, b: lo + 1, distance }));
                }
                _ => {
                    let split = Split::of(xs, lo, hi);
                    let (left, right) = check.partition(&view, &split);
                    frames.push(Frame::Combine { split, view });
                    frames.push(Frame::Descend { lo: split.mid, hi, view: right });
                    frames.push(Frame::Descend { lo, hi: split.mid, view: left });
                }
            },
            Frame::Combine { split, view } => {
                debug_assert!(results.len() >= 2, "combine without two sub-results");
                let right = results.pop().flatten();
                let left = results.pop().flatten();
                stats.combines += 1;
                let best = closer(left, right);
                results.push(check.cross(xs, &split, &view, best, stats));
            }
        }
    }

    debug_assert_eq!(results.len(), 1);
    return results.pop().flatten();
}
