// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Interval scheduling and interval coloring.
//!
//! Intervals are half-open, `[start, end)`, so an interval ending at `t` does
//! not conflict with one starting at `t`.
//!
//! - **Scheduling**: pick as many pairwise non-conflicting intervals as
//!   possible. Taking the earliest-finishing compatible interval is optimal:
//!   it leaves the most room for the rest.
//! - **Coloring**: split all intervals into as few conflict-free groups as
//!   possible. The optimum equals the greatest number of intervals covering
//!   any single instant, and sweeping by start time with the smallest free
//!   color attains it.

use std::collections::BTreeMap;
use std::fmt;

use crate::Error;

/// Largest input [`schedule_brute`] will enumerate subsets of.
pub const BRUTE_FORCE_LIMIT: usize = 16;

/// A non-empty half-open interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    start: u32,
    end: u32,
}

impl Interval {
    pub fn new(start: u32, end: u32) -> Result<Interval, Error> {
        if start >= end {
            return Err(Error::EmptyInterval { start, end });
        }
        return Ok(Interval { start, end });
    }

    pub fn start(&self) -> u32 {
        return self.start;
    }

    pub fn end(&self) -> u32 {
        return self.end;
    }

    /// True when the two intervals share at least one instant.
    pub fn conflicts(&self, other: &Interval) -> bool {
        return self.start < other.end && other.start < self.end;
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "[{}, {})", self.start, self.end);
    }
}

/// True when no two intervals in `schedule` conflict.
pub fn is_compatible(schedule: &[Interval]) -> bool {
    for i in 0..schedule.len() {
        for j in (i + 1)..schedule.len() {
            if schedule[i].conflicts(&schedule[j]) {
                return false;
            }
        }
    }
    return true;
}

fn by_start(mut schedule: Vec<Interval>) -> Vec<Interval> {
    schedule.sort_by_key(|i| (i.start, i.end));
    return schedule;
}

/// Largest compatible subset, by trying every subset. Returned in start
/// order. At most [`BRUTE_FORCE_LIMIT`] intervals.
pub fn schedule_brute(intervals: &[Interval]) -> Result<Vec<Interval>, Error> {
    if intervals.len() > BRUTE_FORCE_LIMIT {
        return Err(Error::TooManyIntervals { len: intervals.len(), max: BRUTE_FORCE_LIMIT });
    }
    let mut best: Vec<Interval> = Vec::new();
    for mask in 0u32..(1 << intervals.len()) {
        if mask.count_ones() as usize <= best.len() {
            continue;
        }
        let subset: Vec<Interval> = intervals
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, interval)| *interval)
            .collect();
        if is_compatible(&subset) {
            best = subset;
        }
    }
    return Ok(by_start(best));
}

/// Earliest-finish-first greedy schedule. Returned in start order.
pub fn schedule_greedy(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|i| (i.end, i.start));
    let mut schedule: Vec<Interval> = Vec::new();
    for interval in sorted {
        if schedule.last().is_none_or(|last| last.end <= interval.start) {
            schedule.push(interval);
        }
    }
    return by_start(schedule);
}

/// Minimum number of colors, as the maximum number of intervals covering
/// one instant.
pub fn coloring_baseline(intervals: &[Interval]) -> usize {
    // ends sort before starts at the same instant: half-open
    let mut events: Vec<(u32, i32)> = Vec::with_capacity(2 * intervals.len());
    for interval in intervals {
        events.push((interval.start, 1));
        events.push((interval.end, -1));
    }
    events.sort();
    let mut depth = 0i32;
    let mut deepest = 0;
    for (_, delta) in events {
        depth += delta;
        deepest = deepest.max(depth);
    }
    return deepest as usize;
}

/// Greedy coloring: by start time, each interval takes the smallest color
/// whose last interval has already ended. Colors are numbered from 1.
pub fn coloring_greedy(intervals: &[Interval]) -> BTreeMap<usize, Vec<Interval>> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|i| (i.start, i.end));
    let mut colors: BTreeMap<usize, Vec<Interval>> = BTreeMap::new();
    for interval in sorted {
        let free = colors
            .iter()
            .find(|(_, group)| group.last().is_some_and(|last| !last.conflicts(&interval)))
            .map(|(&color, _)| color);
        let color = free.unwrap_or(colors.len() + 1);
        colors.entry(color).or_default().push(interval);
    }
    return colors;
}

#[cfg(test)]
mod tests {
    use super::*;
    use closest::tester::DifferentialTester;
    use closest::tester::TesterConfig;
    use proptest::prelude::*;
    use rand::Rng;
    use rand::rngs::StdRng;

    fn iv(start: u32, end: u32) -> Interval {
        return Interval::new(start, end).unwrap();
    }

    /// 3 to 7 intervals starting in `0..=20`, each 1 to 7 long.
    fn random_intervals(rng: &mut StdRng) -> Vec<Interval> {
        let n = rng.gen_range(3..=7);
        return (0..n)
            .map(|_| {
                let start = rng.gen_range(0..=20);
                iv(start, start + rng.gen_range(1..=7))
            })
            .collect();
    }

    fn arbitrary_interval() -> impl Strategy<Value = Interval> {
        return (0u32..50, 1u32..10).prop_map(|(start, len)| iv(start, start + len));
    }

    #[test]
    fn conflicts_are_half_open() {
        assert!(iv(0, 5).conflicts(&iv(4, 6)));
        assert!(iv(0, 5).conflicts(&iv(1, 2)));
        assert!(iv(1, 2).conflicts(&iv(0, 5)));
        assert!(!iv(0, 5).conflicts(&iv(5, 6)));
        assert!(iv(3, 4).conflicts(&iv(3, 4)));
    }

    #[test]
    fn empty_interval_rejected() {
        assert_eq!(Interval::new(3, 3), Err(Error::EmptyInterval { start: 3, end: 3 }));
        assert!(Interval::new(4, 3).is_err());
    }

    #[test]
    fn greedy_schedule_example() {
        let intervals = [iv(0, 6), iv(1, 4), iv(3, 5), iv(3, 8), iv(4, 7), iv(5, 9), iv(6, 10), iv(8, 11)];
        let schedule = schedule_greedy(&intervals);
        assert_eq!(schedule, vec![iv(1, 4), iv(4, 7), iv(8, 11)]);
        assert!(is_compatible(&schedule));
    }

    #[test]
    fn brute_rejects_large_input() {
        let intervals: Vec<Interval> = (0..17).map(|i| iv(i, i + 1)).collect();
        assert_eq!(
            schedule_brute(&intervals),
            Err(Error::TooManyIntervals { len: 17, max: BRUTE_FORCE_LIMIT })
        );
    }

    #[test]
    fn coloring_counts() {
        assert_eq!(coloring_baseline(&[]), 0);
        assert!(coloring_greedy(&[]).is_empty());
        assert_eq!(coloring_baseline(&[iv(0, 1)]), 1);
        assert_eq!(coloring_greedy(&[iv(0, 1)]).len(), 1);
        // back to back intervals share a color
        assert_eq!(coloring_greedy(&[iv(0, 2), iv(2, 4), iv(4, 6)]).len(), 1);
        let nested = [iv(0, 10), iv(1, 9), iv(2, 8), iv(9, 12)];
        assert_eq!(coloring_baseline(&nested), 3);
        assert_eq!(coloring_greedy(&nested).len(), 3);
    }

    #[test]
    fn scheduling_tester() {
        let mut tester = DifferentialTester::new(
            "Interval Scheduling Tester",
            |v: &Vec<Interval>| schedule_brute(v).map(|s| s.len()),
            random_intervals,
            TesterConfig::default(),
        );
        tester.add_function("Greedy - Sorting By Finish Time", |v: &Vec<Interval>| Ok(schedule_greedy(v).len()));
        let report = tester.test_all();
        assert!(report.all_passed(), "{report}");
    }

    #[test]
    fn coloring_tester() {
        let mut tester = DifferentialTester::new(
            "Interval Coloring Tester",
            |v: &Vec<Interval>| coloring_baseline(v),
            random_intervals,
            TesterConfig::default(),
        );
        tester.add_function("Greedy Interval Coloring", |v: &Vec<Interval>| coloring_greedy(v).len());
        let report = tester.test_all();
        assert!(report.all_passed(), "{report}");
    }

    proptest! {
        #[test]
        fn greedy_schedule_is_optimal(intervals in prop::collection::vec(arbitrary_interval(), 0..12)) {
            let greedy = schedule_greedy(&intervals);
            prop_assert!(is_compatible(&greedy));
            prop_assert_eq!(greedy.len(), schedule_brute(&intervals).unwrap().len());
        }

        #[test]
        fn greedy_coloring_is_valid_and_optimal(intervals in prop::collection::vec(arbitrary_interval(), 0..60)) {
            let colors = coloring_greedy(&intervals);
            prop_assert_eq!(colors.values().map(Vec::len).sum::<usize>(), intervals.len());
            for group in colors.values() {
                prop_assert!(is_compatible(group));
            }
            prop_assert_eq!(colors.len(), coloring_baseline(&intervals));
        }
    }
}
