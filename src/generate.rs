// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Random and adversarial point-set generators.
//!
//! All generators take the RNG explicitly so callers control seeding; the
//! tester and the benches seed a `StdRng` for reproducible runs.

use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

use crate::Point;

/// Shape of randomly generated point sets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointSetConfig {
    /// Smallest set size (inclusive, at least 2).
    pub min_len: usize,
    /// Largest set size (inclusive).
    pub max_len: usize,
    /// Coordinates are drawn from `[0, extent)`.
    pub extent: f64,
}

impl Default for PointSetConfig {
    fn default() -> Self {
        return PointSetConfig { min_len: 2, max_len: 50, extent: 20.0 };
    }
}

/// A point uniformly distributed in the square `[0, extent)²`.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> Point {
    return Point::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent));
}

/// `n` independent random points in `[0, extent)²`.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, n: usize, extent: f64) -> Vec<Point> {
    return (0..n).map(|_| random_point(rng, extent)).collect();
}

/// A random point set whose size is drawn from `config.min_len..=config.max_len`.
pub fn random_point_set<R: Rng + ?Sized>(rng: &mut R, config: &PointSetConfig) -> Vec<Point> {
    let min_len = config.min_len.max(2);
    let max_len = config.max_len.max(min_len);
    let n = rng.gen_range(min_len..=max_len);
    return random_points(rng, n, config.extent);
}

/// `n` points on the integer grid `[0, side)²`. Duplicates are likely once
/// `n` approaches `side²`, which exercises tie and zero-distance handling.
pub fn random_lattice_points<R: Rng + ?Sized>(rng: &mut R, n: usize, side: u32) -> Vec<Point> {
    let side = side.max(1);
    return (0..n)
        .map(|_| Point::new(rng.gen_range(0..side) as f64, rng.gen_range(0..side) as f64))
        .collect();
}

/// Points on the vertical line `x = line_x`, stacked upward from `y = 0` by
/// the given gaps.
pub fn collinear_on_line(line_x: f64, gaps: &[f64]) -> Vec<Point> {
    let mut y = 0.0;
    let mut points = Vec::with_capacity(gaps.len() + 1);
    points.push(Point::new(line_x, y));
    for gap in gaps {
        y += gap;
        points.push(Point::new(line_x, y));
    }
    return points;
}

/// Points crowded around the vertical line `x = line_x`: each point is placed
/// within `spread` of the line, and a fraction `on_line` of them exactly on it.
pub fn crowded_line<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    line_x: f64,
    spread: f64,
    on_line: f64,
    extent: f64,
) -> Vec<Point> {
    return (0..n)
        .map(|_| {
            let y = rng.gen_range(0.0..extent);
            if rng.gen_bool(on_line.clamp(0.0, 1.0)) {
                return Point::new(line_x, y);
            }
            let dx = rng.gen_range(-spread..=spread);
            return Point::new(line_x + dx, y);
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn point_set_respects_config() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = PointSetConfig { min_len: 3, max_len: 7, extent: 2.0 };
        for _ in 0..100 {
            let points = random_point_set(&mut rng, &config);
            assert!((3..=7).contains(&points.len()));
            assert!(points.iter().all(|p| (0.0..2.0).contains(&p.x) && (0.0..2.0).contains(&p.y)));
        }
    }

    #[test]
    fn config_never_drops_below_two_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = PointSetConfig { min_len: 0, max_len: 0, extent: 1.0 };
        assert_eq!(random_point_set(&mut rng, &config).len(), 2);
    }

    #[test]
    fn same_seed_same_points() {
        let a = random_points(&mut StdRng::seed_from_u64(1), 10, 20.0);
        let b = random_points(&mut StdRng::seed_from_u64(1), 10, 20.0);
        assert_eq!(a, b);
    }

    #[test]
    fn lattice_points_are_integral() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = random_lattice_points(&mut rng, 50, 4);
        assert!(points.iter().all(|p| p.x.fract() == 0.0 && p.y < 4.0));
    }

    #[test]
    fn collinear_stacks_gaps() {
        let points = collinear_on_line(2.5, &[1.0, 10.0, 0.5]);
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.0, 1.0, 11.0, 11.5]);
        assert!(points.iter().all(|p| p.x == 2.5));
    }

    #[test]
    fn crowded_line_stays_near_line() {
        let mut rng = StdRng::seed_from_u64(9);
        let points = crowded_line(&mut rng, 200, 10.0, 0.25, 0.5, 20.0);
        assert!(points.iter().all(|p| (p.x - 10.0).abs() <= 0.25));
        assert!(points.iter().any(|p| p.x == 10.0));
    }
}
