// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! The closest-pair result and the internal candidate used while solving.

use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeStruct;

use crate::Point;

/// One pair achieving the minimum pairwise distance of a point set.
///
/// Canonically ordered so that `p.x <= q.x` (ties on x put the lower y
/// first). When several pairs tie for the minimum any of them may be
/// returned; only the distance is guaranteed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    pub p: Point,
    pub q: Point,
}

impl ClosestPair {
    /// Build a canonically ordered pair.
    pub fn new(a: Point, b: Point) -> ClosestPair {
        if b.cmp_by_x(&a).is_lt() {
            return ClosestPair { p: b, q: a };
        }
        return ClosestPair { p: a, q: b };
    }

    /// Distance between the two points.
    #[inline]
    pub fn distance(&self) -> f64 {
        return self.p.distance(&self.q);
    }

    /// True when `self` and `other` name the same two points, in either order.
    pub fn same_points(&self, other: &ClosestPair) -> bool {
        return (self.p == other.p && self.q == other.q)
            || (self.p == other.q && self.q == other.p);
    }
}

impl Serialize for ClosestPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ClosestPair", 3)?;
        state.serialize_field("p", &self.p)?;
        state.serialize_field("q", &self.q)?;
        state.serialize_field("distance", &self.distance())?;
        return state.end();
    }
}

/// A pair of indices into the x-sorted working copy, with its distance.
///
/// `None` in an `Option<Candidate>` is the "no pair here" result of a 0 or 1
/// point partition; it never wins a comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Candidate {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

impl Candidate {
    /// Resolve the indices against the working copy they point into.
    pub fn to_pair(&self, xs: &[Point]) -> ClosestPair {
        return ClosestPair::new(xs[self.a], xs[self.b]);
    }
}

/// Distance bound implied by the best candidate so far.
#[inline]
pub(crate) fn bound(best: &Option<Candidate>) -> f64 {
    return best.map_or(f64::INFINITY, |c| c.distance);
}

/// Pick the closer of two sub-results. Ties keep `left`; `None` is ignored.
pub(crate) fn closer(left: Option<Candidate>, right: Option<Candidate>) -> Option<Candidate> {
    return match (left, right) {
        (Some(l), Some(r)) => {
            if r.distance < l.distance {
                Some(r)
            } else {
                Some(l)
            }
        }
        (Some(l), None) => Some(l),
        (None, r) => r,
    };
}
