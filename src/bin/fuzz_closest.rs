//! AFL fuzz harness for the closest-pair solvers
//!
//! This harness checks the solver contract on arbitrary inputs:
//! 1. Agreement: every divide-and-conquer variant returns the oracle's distance
//! 2. Canonical order: the returned pair has `p.x <= q.x`
//! 3. Membership: both returned points come from the input
//!
//! Model: the input bytes are decoded into a point set. Coordinates are
//! small integers plus a quarter-step fraction, so duplicates, shared x
//! values and exact ties (the hard cases for splitting) are common.

use afl::fuzz;
use closest::BruteForce;
use closest::ClosestPairSolver;
use closest::Point;
use closest::Variant;
use closest::WindowPolicy;

/// Decode one point from three bytes, or `None` when the input runs out.
fn point_from_bytes(bytes: &[u8]) -> Option<(Point, &[u8])> {
    if bytes.len() < 3 {
        return None;
    }
    let x = (bytes[0] % 32) as f64 + (bytes[2] & 0b11) as f64 * 0.25;
    let y = (bytes[1] % 32) as f64 + ((bytes[2] >> 2) & 0b11) as f64 * 0.25;
    return Some((Point::new(x, y), &bytes[3..]));
}

fn main() {
    let policies = [WindowPolicy::Guarded, WindowPolicy::CLASSIC];

    fuzz!(|data: &[u8]| {
        let mut points = Vec::new();
        let mut remaining = data;
        while let Some((point, rest)) = point_from_bytes(remaining) {
            points.push(point);
            remaining = rest;
        }

        let oracle = BruteForce.closest_pair(&points);
        if points.len() < 2 {
            assert!(oracle.is_err(), "oracle accepted {} points", points.len());
            return;
        }
        let expected = oracle.unwrap().distance();

        for policy in policies {
            for variant in Variant::DIVIDE_CONQUER {
                let solver = variant.solver(policy);
                let pair = solver.closest_pair(&points).unwrap();
                assert!(
                    (pair.distance() - expected).abs() <= 1e-9,
                    "{} ({}) disagreed with the oracle on {:?}",
                    solver.name(), policy, points
                );
                assert!(pair.p.x <= pair.q.x, "pair not in canonical order");
                assert!(points.contains(&pair.p) && points.contains(&pair.q));
            }
        }
    });
}
