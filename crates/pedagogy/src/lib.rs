// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Course exercises with a baseline and an improved algorithm each.
//!
//! Every module pairs a slow, obviously correct solution with a faster one,
//! and the tests check the fast one against the slow one with the
//! differential tester from `closest::tester`.
//!
//! # Exercises
//!
//! | Module | Baseline | Improved | Cost |
//! |--------|----------|----------|------|
//! | `sort` | `naive_inversions` | `count_inversions` | O(n²) → O(n log n) |
//! | `multiply` | `schoolbook`, `divide_conquer` | `karatsuba` | O(n²) → O(n^1.58) |
//! | `modexp` | `looping` | `recursive`, `repeated_squaring` | O(b) → O(log b) |
//! | `majority` | `majority_baseline` | `majority_element` | O(n) hashing → O(n) equality only |
//! | `interval` | `schedule_brute`, `coloring_baseline` | `schedule_greedy`, `coloring_greedy` | O(2ⁿ) → O(n log n) |
//!
//! `recurrence` classifies divide-and-conquer recurrences with the Master
//! theorem; its floating-point `solve_by_exponent` is checked against the
//! exact integer `solve`.

pub mod error;
pub mod interval;
pub mod majority;
pub mod modexp;
pub mod multiply;
pub mod recurrence;
pub mod sort;

pub use error::Error;
