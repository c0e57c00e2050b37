// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("not a decimal number: {input:?}")]
    InvalidDigits { input: String },
    #[error("interval [{start}, {end}) is empty")]
    EmptyInterval { start: u32, end: u32 },
    #[error("brute-force scheduling supports at most {max} intervals, got {len}")]
    TooManyIntervals { len: usize, max: usize },
    #[error("recurrence needs a >= 1 and b >= 2, got a = {branching}, b = {shrink}")]
    InvalidRecurrence { branching: u64, shrink: u64 },
}
