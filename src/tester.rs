// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Randomized differential testing.
//!
//! A [`DifferentialTester`] holds a trusted baseline function, an input
//! generator and any number of named candidate functions. Each candidate is
//! run against the baseline on a battery of generated inputs; the battery
//! stops at the first disagreement and records the offending input.
//!
//! Every battery reseeds the generator from the configured seed, so all
//! candidates see exactly the same inputs and a failure can be replayed.
//!
//! # Example
//!
//! ```
//! use closest::tester::{DifferentialTester, TesterConfig};
//!
//! let mut tester = DifferentialTester::new(
//!     "squaring",
//!     |x: &u64| x * x,
//!     |rng| rand::Rng::gen_range(rng, 0..1000u64),
//!     TesterConfig::default(),
//! );
//! tester.add_function("by addition", |x: &u64| (0..*x).map(|_| *x).sum());
//! let report = tester.test_all();
//! assert!(report.all_passed());
//! ```

use std::fmt;
use std::fmt::Debug;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use serde::Serialize;

/// Settings for a tester run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TesterConfig {
    /// Number of generated inputs per candidate.
    pub cases: usize,
    /// Seed for the input generator.
    pub seed: u64,
}

impl Default for TesterConfig {
    fn default() -> Self {
        return TesterConfig { cases: 50, seed: 0 };
    }
}

/// The outcome of running one candidate on one input.
#[derive(Clone, Debug)]
pub struct CaseOutcome<I, O> {
    pub input: I,
    pub expected: O,
    pub actual: O,
    pub passed: bool,
}

/// A recorded disagreement with the baseline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub function: String,
    /// Index of the failing case within the battery.
    pub case: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "{} failed on case {}.\n\tInput: {}\n\tExpected: {}\n\tOutput: {}",
            self.function, self.case, self.input, self.expected, self.actual
        );
    }
}

/// Summary of a full run over every candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
    pub cases: usize,
    pub seed: u64,
    pub passing: Vec<String>,
    pub failing: Vec<Failure>,
}

impl Report {
    pub fn all_passed(&self) -> bool {
        return self.failing.is_empty();
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in &self.failing {
            writeln!(f, "{failure}")?;
        }
        let failing: Vec<&str> = self.failing.iter().map(|x| x.function.as_str()).collect();
        return write!(
            f,
            "{} Test Results ({} cases, seed {}):\n\tPassing Functions: {:?}\n\tFailing Functions: {:?}",
            self.name, self.cases, self.seed, self.passing, failing
        );
    }
}

type Function<'a, I, O> = Box<dyn Fn(&I) -> O + 'a>;

/// Runs candidate functions against a baseline on generated inputs.
pub struct DifferentialTester<'a, I, O> {
    name: String,
    baseline: Function<'a, I, O>,
    generator: Box<dyn FnMut(&mut StdRng) -> I + 'a>,
    equivalent: Box<dyn Fn(&O, &O) -> bool + 'a>,
    functions: Vec<(String, Function<'a, I, O>)>,
    config: TesterConfig,
}

impl<'a, I: Debug + 'a, O: Debug + PartialEq + 'a> DifferentialTester<'a, I, O> {
    /// A tester comparing outputs with `==`.
    pub fn new(
        name: impl Into<String>,
        baseline: impl Fn(&I) -> O + 'a,
        generator: impl FnMut(&mut StdRng) -> I + 'a,
        config: TesterConfig,
    ) -> Self {
        return DifferentialTester {
            name: name.into(),
            baseline: Box::new(baseline),
            generator: Box::new(generator),
            equivalent: Box::new(|a: &O, b: &O| a == b),
            functions: Vec::new(),
            config,
        };
    }
}

impl<'a, I: Debug, O: Debug> DifferentialTester<'a, I, O> {
    /// Replace the output comparison, e.g. to compare only part of a result.
    pub fn with_equivalence(mut self, equivalent: impl Fn(&O, &O) -> bool + 'a) -> Self {
        self.equivalent = Box::new(equivalent);
        return self;
    }

    /// Register a candidate. Candidates run in registration order.
    pub fn add_function(&mut self, name: impl Into<String>, function: impl Fn(&I) -> O + 'a) {
        self.functions.push((name.into(), Box::new(function)));
    }

    /// Generate one input and run the candidate at `index` on it.
    pub fn test_function(&mut self, index: usize, rng: &mut StdRng) -> CaseOutcome<I, O> {
        let input = (self.generator)(rng);
        let expected = (self.baseline)(&input);
        let actual = (self.functions[index].1)(&input);
        let passed = (self.equivalent)(&expected, &actual);
        return CaseOutcome { input, expected, actual, passed };
    }

    /// Run the candidate at `index` on a full battery. Stops at the first
    /// failure.
    pub fn test_battery(&mut self, index: usize) -> Result<(), Failure> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        for case in 0..self.config.cases {
            let outcome = self.test_function(index, &mut rng);
            if !outcome.passed {
                return Err(Failure {
                    function: self.functions[index].0.clone(),
                    case,
                    input: format!("{:?}", outcome.input),
                    expected: format!("{:?}", outcome.expected),
                    actual: format!("{:?}", outcome.actual),
                });
            }
        }
        return Ok(());
    }

    /// Run every registered candidate.
    pub fn test_all(&mut self) -> Report {
        let mut passing = Vec::new();
        let mut failing = Vec::new();
        for index in 0..self.functions.len() {
            match self.test_battery(index) {
                Ok(()) => passing.push(self.functions[index].0.clone()),
                Err(failure) => failing.push(failure),
            }
        }
        return Report {
            name: self.name.clone(),
            cases: self.config.cases,
            seed: self.config.seed,
            passing,
            failing,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn tester<'a>() -> DifferentialTester<'a, Vec<i32>, Vec<i32>> {
        return DifferentialTester::new(
            "sorting",
            |v: &Vec<i32>| {
                let mut v = v.clone();
                v.sort();
                v
            },
            |rng: &mut StdRng| {
                let n = rng.gen_range(0..20);
                (0..n).map(|_| rng.gen_range(-50..50)).collect()
            },
            TesterConfig { cases: 100, seed: 5 },
        );
    }

    #[test]
    fn passing_candidate() {
        let mut tester = tester();
        tester.add_function("unstable", |v: &Vec<i32>| {
            let mut v = v.clone();
            v.sort_unstable();
            v
        });
        let report = tester.test_all();
        assert!(report.all_passed());
        assert_eq!(report.passing, vec!["unstable".to_string()]);
    }

    #[test]
    fn failing_candidate_records_input() {
        let mut tester = tester();
        tester.add_function("identity", |v: &Vec<i32>| v.clone());
        tester.add_function("reverse sorted", |v: &Vec<i32>| {
            let mut v = v.clone();
            v.sort_by(|a, b| b.cmp(a));
            v
        });
        let report = tester.test_all();
        assert_eq!(report.failing.len(), 2);
        assert_eq!(report.failing[0].function, "identity");
        assert!(report.failing[0].input.starts_with('['));
        assert!(report.to_string().contains("Failing Functions: [\"identity\", \"reverse sorted\"]"));
    }

    #[test]
    fn batteries_replay_the_same_inputs() {
        let mut tester = tester();
        tester.add_function("identity", |v: &Vec<i32>| v.clone());
        let first = tester.test_battery(0).unwrap_err();
        let second = tester.test_battery(0).unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_equivalence() {
        let mut tester = tester().with_equivalence(|a, b| a.len() == b.len());
        tester.add_function("identity", |v: &Vec<i32>| v.clone());
        assert!(tester.test_all().all_passed());
    }

    #[test]
    fn report_serializes() {
        let mut tester = tester();
        tester.add_function("identity", |v: &Vec<i32>| v.clone());
        let report = tester.test_all();
        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
