// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Closest - the closest pair of points by divide and conquer.
//!
//! The crate builds the classic algorithm in stages, each satisfying the same
//! contract (return a pair whose distance is the global minimum):
//!
//! | Solver | Cross-split step | Cost |
//! |--------|------------------|------|
//! | `BruteForce` | every pair (oracle) | Θ(n²) |
//! | `NaiveDivideConquer` | every left × right pair | Θ(n²) |
//! | `StripDivideConquer` | left × right within `best` of the line | O(n²) worst case |
//! | `WindowDivideConquer` | y-ordered strip, bounded window | Θ(n log n) |
//!
//! The divide-and-conquer solvers run on an explicit work stack, so very
//! large inputs never exhaust the call stack. Empty or single-point halves
//! report "no pair" as `None` and never compete with a real pair.
//!
//! Testing support lives alongside: [`generate`] produces random and
//! adversarial point sets and [`tester`] runs a randomized differential test
//! of any set of functions against a baseline.
//!
//! # Example
//!
//! ```
//! use closest::{ClosestPairSolver, Point, WindowDivideConquer};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(5.0, 5.0),
//!     Point::new(5.1, 5.0),
//! ];
//!
//! let pair = WindowDivideConquer::default().closest_pair(&points).unwrap();
//! assert_eq!(pair.p, Point::new(5.0, 5.0));
//! assert!((pair.distance() - 0.1).abs() < 1e-9);
//! ```

pub mod brute;
mod driver;
pub mod error;
pub mod generate;
pub mod naive;
pub mod pair;
pub mod point;
pub mod solver;
pub mod split;
pub mod stats;
pub mod strip;
pub mod tester;
pub mod window;

pub use brute::BruteForce;
pub use error::Error;
pub use naive::NaiveDivideConquer;
pub use pair::ClosestPair;
pub use point::Point;
pub use solver::ClosestPairSolver;
pub use solver::Variant;
pub use stats::SolveStats;
pub use strip::StripDivideConquer;
pub use window::WindowDivideConquer;
pub use window::WindowPolicy;
