// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Quick single-run benchmark for development iteration.
//!
//! Times each solver once per input size and prints the evaluation counts
//! alongside, so the asymptotic gap between the variants is visible without
//! a full criterion run.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use closest::Variant;
use closest::WindowPolicy;
use closest::generate::random_points;

/// Sizes above this skip the quadratic variants.
const QUADRATIC_LIMIT: usize = 20_000;

fn main() {
    let sizes = [1_000, 10_000, 100_000, 1_000_000];

    for size in sizes {
        let mut rng = StdRng::seed_from_u64(42);
        let points = random_points(&mut rng, size, 1e6);
        println!("\n=== {} points ===", size);

        for variant in Variant::ALL {
            if size > QUADRATIC_LIMIT && matches!(variant, Variant::Brute | Variant::Naive) {
                println!("  {:<36} skipped", variant.solver(WindowPolicy::Guarded).name());
                continue;
            }
            for policy in [WindowPolicy::Guarded, WindowPolicy::CLASSIC] {
                if variant != Variant::Window && policy != WindowPolicy::Guarded {
                    continue;
                }
                let solver = variant.solver(policy);
                let start = Instant::now();
                let result = solver.closest_pair_with_stats(&points);
                let elapsed = start.elapsed();
                match result {
                    Ok((pair, stats)) => println!(
                        "  {:<36} {:>12?}  d = {:.6}  evals = {}  depth = {}",
                        format!("{} ({})", solver.name(), policy),
                        elapsed,
                        pair.distance(),
                        stats.distance_evals,
                        stats.max_stack_depth
                    ),
                    Err(err) => println!("  {:<36} error: {}", solver.name(), err),
                }
            }
        }
    }
}
