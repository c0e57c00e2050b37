// model = "claude-opus-4-5"
// created = 2026-10-18
// modified = 2026-10-18
// driver = "Isaac Clayton"

//! Command-line front end: solve a point set, run the differential tester
//! over every variant, or generate a random point set.

use std::fs;
use std::io;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use closest::BruteForce;
use closest::ClosestPair;
use closest::ClosestPairSolver;
use closest::Point;
use closest::SolveStats;
use closest::Variant;
use closest::WindowPolicy;
use closest::generate::PointSetConfig;
use closest::generate::random_point_set;
use closest::tester::DifferentialTester;
use closest::tester::TesterConfig;

#[derive(Parser)]
#[command(name = "closest", about = "Closest pair of points by divide and conquer", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the closest pair of a JSON point array.
    Solve {
        /// Input file; reads stdin when omitted.
        path: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = VariantArg::Window)]
        variant: VariantArg,
        /// `guarded` or `fixed:<k>`.
        #[arg(long, default_value = "guarded")]
        window: WindowPolicy,
        /// Include cost counters in the output.
        #[arg(long)]
        stats: bool,
    },
    /// Run every divide-and-conquer variant against the brute-force oracle.
    Check {
        #[arg(long, default_value_t = 50)]
        cases: usize,
        #[arg(long, default_value_t = 2)]
        min_len: usize,
        #[arg(long, default_value_t = 50)]
        max_len: usize,
        #[arg(long, default_value_t = 20.0)]
        extent: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value = "guarded")]
        window: WindowPolicy,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print a random point set as JSON.
    Generate {
        #[arg(long, default_value_t = 2)]
        min_len: usize,
        #[arg(long, default_value_t = 50)]
        max_len: usize,
        #[arg(long, default_value_t = 20.0)]
        extent: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum VariantArg {
    Brute,
    Naive,
    Strip,
    Window,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Variant {
        return match arg {
            VariantArg::Brute => Variant::Brute,
            VariantArg::Naive => Variant::Naive,
            VariantArg::Strip => Variant::Strip,
            VariantArg::Window => Variant::Window,
        };
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse points: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Solve(#[from] closest::Error),
    #[error("{failing} variant(s) disagreed with the oracle")]
    CheckFailed { failing: usize },
}

/// Accepts both `{"x": 1, "y": 2}` and `[1, 2]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PointInput {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

impl From<PointInput> for Point {
    fn from(input: PointInput) -> Point {
        return match input {
            PointInput::Object { x, y } => Point::new(x, y),
            PointInput::Pair([x, y]) => Point::new(x, y),
        };
    }
}

#[derive(Serialize)]
struct SolveOutput<'a> {
    variant: &'a str,
    pair: ClosestPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<SolveStats>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    return match cli.command {
        Command::Solve { path, variant, window, stats } => solve(path, variant.into(), window, stats),
        Command::Check { cases, min_len, max_len, extent, seed, window, json } => {
            let points = PointSetConfig { min_len, max_len, extent };
            check(TesterConfig { cases, seed }, points, window, json)
        }
        Command::Generate { min_len, max_len, extent, seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let points = random_point_set(&mut rng, &PointSetConfig { min_len, max_len, extent });
            println!("{}", serde_json::to_string_pretty(&points)?);
            Ok(())
        }
    };
}

fn read_points(path: Option<PathBuf>) -> Result<Vec<Point>, CliError> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };
    let inputs: Vec<PointInput> = serde_json::from_str(&raw)?;
    return Ok(inputs.into_iter().map(Point::from).collect());
}

fn solve(path: Option<PathBuf>, variant: Variant, window: WindowPolicy, stats: bool) -> Result<(), CliError> {
    let points = read_points(path)?;
    let solver = variant.solver(window);
    let (pair, counters) = solver.closest_pair_with_stats(&points)?;
    let output = SolveOutput {
        variant: solver.name(),
        pair,
        stats: stats.then_some(counters),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    return Ok(());
}

fn check(config: TesterConfig, points: PointSetConfig, window: WindowPolicy, json: bool) -> Result<(), CliError> {
    let mut tester = DifferentialTester::new(
        "Closest Pair Tester",
        |p: &Vec<Point>| BruteForce.closest_pair(p).map(|pair| pair.distance()),
        move |rng: &mut StdRng| random_point_set(rng, &points),
        config,
    )
    .with_equivalence(|expected, actual| match (expected, actual) {
        (Ok(e), Ok(a)) => (e - a).abs() <= 1e-9 * e.abs().max(1.0),
        (Err(e), Err(a)) => e == a,
        _ => false,
    });

    for variant in Variant::DIVIDE_CONQUER {
        let solver = variant.solver(window);
        let name = solver.name();
        tester.add_function(name, move |p: &Vec<Point>| solver.closest_pair(p).map(|pair| pair.distance()));
    }

    let report = tester.test_all();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    if !report.all_passed() {
        return Err(CliError::CheckFailed { failing: report.failing.len() });
    }
    return Ok(());
}
