// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! The Master theorem for divide-and-conquer recurrences.
//!
//! `T(n) = a·T(n/b) + O(n^d)` with `a >= 1`, `b >= 2`, `d >= 0` solves by
//! comparing the work at the root, `n^d`, with the number of leaves,
//! `n^log_b(a)`:
//!
//! | Case | Bound |
//! |------|-------|
//! | `a < b^d` | `Θ(n^d)` |
//! | `a = b^d` | `Θ(n^d log n)` |
//! | `a > b^d` | `Θ(n^log_b(a))` |
//!
//! Merge sort is `2·T(n/2) + O(n)`, the middle case. Karatsuba is
//! `3·T(n/2) + O(n)`, the last one.

use std::cmp::Ordering;
use std::fmt;

use crate::Error;

/// `T(n) = branching·T(n/shrink) + O(n^degree)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recurrence {
    branching: u64,
    shrink: u64,
    degree: u32,
}

/// The asymptotic solution of a [`Recurrence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// `Θ(n^degree)`: the root dominates.
    Root { degree: u32 },
    /// `Θ(n^degree log n)`: every level costs the same.
    Balanced { degree: u32 },
    /// `Θ(n^log_shrink(branching))`: the leaves dominate.
    Leaves { branching: u64, shrink: u64 },
}

impl Recurrence {
    pub fn new(branching: u64, shrink: u64, degree: u32) -> Result<Recurrence, Error> {
        if branching == 0 || shrink < 2 {
            return Err(Error::InvalidRecurrence { branching, shrink });
        }
        return Ok(Recurrence { branching, shrink, degree });
    }

    pub fn branching(&self) -> u64 {
        return self.branching;
    }

    pub fn shrink(&self) -> u64 {
        return self.shrink;
    }

    pub fn degree(&self) -> u32 {
        return self.degree;
    }

    /// Classify by comparing `a` with `b^d` exactly, in integers.
    pub fn solve(&self) -> Bound {
        // b^d past u64 is certainly above a
        let root_work = self.shrink.checked_pow(self.degree);
        let ordering = root_work.map_or(Ordering::Less, |work| self.branching.cmp(&work));
        return self.bound_for(ordering);
    }

    /// Classify by comparing the critical exponent `log_b(a)` with `d` in
    /// floating point, with a tolerance for the equal case.
    pub fn solve_by_exponent(&self) -> Bound {
        let critical = (self.branching as f64).ln() / (self.shrink as f64).ln();
        let degree = self.degree as f64;
        let ordering = if (critical - degree).abs() < 1e-9 {
            Ordering::Equal
        } else if critical < degree {
            Ordering::Less
        } else {
            Ordering::Greater
        };
        return self.bound_for(ordering);
    }

    fn bound_for(&self, branching_vs_root: Ordering) -> Bound {
        return match branching_vs_root {
            Ordering::Less => Bound::Root { degree: self.degree },
            Ordering::Equal => Bound::Balanced { degree: self.degree },
            Ordering::Greater => Bound::Leaves { branching: self.branching, shrink: self.shrink },
        };
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "T(n) = {}·T(n/{}) + O(n^{})", self.branching, self.shrink, self.degree);
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Bound::Root { degree } => write!(f, "Θ(n^{degree})"),
            Bound::Balanced { degree } => write!(f, "Θ(n^{degree} log n)"),
            Bound::Leaves { branching, shrink } => write!(f, "Θ(n^log_{shrink}({branching}))"),
        };
    }
}
