// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! The splitting primitive shared by every divide-and-conquer variant.
//!
//! Given points sorted by x, the splitting line is the midpoint between the
//! x-coordinates on either side of the median index. Points strictly left of
//! the line form the left half and everything else (including points exactly
//! on the line) the right half, so both halves are contiguous runs of the
//! sorted input and keep their order without re-sorting.
//!
//! # Degenerate splits
//!
//! If every point up to the median shares one x-coordinate, nothing lies
//! strictly left of the line and the x-split would not make progress. In that
//! case the run is split positionally at the median instead. Every left point
//! then sits exactly on the line, so `left.x <= line <= right.x` still holds,
//! which is all the strip and window pruning needs.

use crate::Point;

/// A split of the run `lo..hi` of an x-sorted slice into `lo..mid` and
/// `mid..hi`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Split {
    pub lo: usize,
    pub mid: usize,
    pub hi: usize,
    /// x-coordinate of the vertical splitting line.
    pub line: f64,
}

impl Split {
    /// Split the run `xs[lo..hi]`. Requires `hi - lo >= 2`.
    pub fn of(xs: &[Point], lo: usize, hi: usize) -> Split {
        debug_assert!(hi - lo >= 2, "cannot split fewer than two points");
        let run = &xs[lo..hi];
        let line = splitting_line(run);
        let (left, _) = split_points(run, line);
        let left = match left.len() {
            0 => run.len() / 2,
            len => len,
        };
        return Split { lo, mid: lo + left, hi, line };
    }

    /// Horizontal distance from `p` to the splitting line.
    #[inline]
    pub fn offset(&self, p: &Point) -> f64 {
        return (p.x - self.line).abs();
    }
}

/// The splitting line of an x-sorted slice of at least two points.
pub fn splitting_line(xs: &[Point]) -> f64 {
    let mid = xs.len() / 2;
    return f64::midpoint(xs[mid - 1].x, xs[mid].x);
}

/// Partition an x-sorted slice at `line`: points with `x < line` go left,
/// the rest go right.
pub fn split_points(xs: &[Point], line: f64) -> (&[Point], &[Point]) {
    return xs.split_at(xs.partition_point(|p| p.x < line));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(f64, f64)]) -> Vec<Point> {
        return coords.iter().copied().map(Point::from).collect();
    }

    #[test]
    fn line_is_midpoint_around_median() {
        let xs = points(&[(0.0, 0.0), (1.0, 1.0), (5.0, 5.0), (5.1, 5.0)]);
        assert_eq!(splitting_line(&xs), 3.0);
    }

    #[test]
    fn odd_length_uses_floor_median() {
        let xs = points(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0)]);
        // mid = 1, so the line sits between x = 0 and x = 2
        assert_eq!(splitting_line(&xs), 1.0);
    }

    #[test]
    fn points_on_the_line_go_right() {
        let xs = points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (1.0, 2.0), (3.0, 0.0)]);
        let (left, right) = split_points(&xs, 1.0);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 4);
        assert_eq!(right[0], Point::new(1.0, 0.0));
    }

    #[test]
    fn split_matches_split_points() {
        let xs = points(&[(0.0, 0.0), (1.0, 1.0), (5.0, 5.0), (5.1, 5.0)]);
        let split = Split::of(&xs, 0, xs.len());
        assert_eq!(split, Split { lo: 0, mid: 2, hi: 4, line: 3.0 });
    }

    #[test]
    fn split_of_subrange_is_absolute() {
        let xs = points(&[(-9.0, 0.0), (0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (6.0, 0.0)]);
        let split = Split::of(&xs, 1, 5);
        assert_eq!(split.mid, 3);
        assert_eq!(split.line, 3.0);
    }

    #[test]
    fn all_same_x_falls_back_to_median() {
        let xs = points(&[(1.0, 0.0), (1.0, 1.0), (1.0, 2.0), (1.0, 3.0), (1.0, 4.0)]);
        let split = Split::of(&xs, 0, xs.len());
        assert_eq!(split.mid, 2);
        assert_eq!(split.line, 1.0);
        assert_eq!(split.offset(&xs[0]), 0.0);
    }

    #[test]
    fn leading_ties_fall_back_but_keep_ordering() {
        // Median pair shares x = 0 with the first point: nothing is strictly left.
        let xs = points(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (7.0, 0.0)]);
        let split = Split::of(&xs, 0, xs.len());
        assert_eq!(split.mid, 2);
        assert!(xs[..split.mid].iter().all(|p| p.x <= split.line));
        assert!(xs[split.mid..].iter().all(|p| p.x >= split.line));
    }

    #[test]
    fn right_half_is_never_empty() {
        let xs = points(&[(0.0, 0.0), (f64::MAX, 0.0)]);
        let split = Split::of(&xs, 0, 2);
        assert_eq!(split.mid, 1);
        assert!(split.line.is_finite());
    }
}
