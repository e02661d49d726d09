//! Correctness Checks
//!
//! Runs `verify_algorithm` for each selected algorithm over a fixed set of
//! input shapes before anyone trusts its timings.

use rand::Rng;
use sortbench_core::{Element, SortAlgorithm, SortError, rand_list, verify_algorithm};

/// Length of the generated fixtures
pub const FIXTURE_LEN: usize = 1000;

/// Outcome of one algorithm on one fixture
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Algorithm identifier
    pub algorithm: &'static str,
    /// Fixture name
    pub fixture: &'static str,
    /// `Ok` when the output was an ascending permutation of the same length
    pub result: Result<(), SortError>,
}

impl CheckOutcome {
    /// Whether the check passed
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Named inputs every algorithm must sort: random, sorted, reversed,
/// all-equal, empty and singleton.
pub fn fixtures<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<(&'static str, Vec<Element>)> {
    let random = rand_list(len, rng);
    let mut sorted = random.clone();
    sorted.sort_unstable();
    let reversed: Vec<Element> = sorted.iter().rev().copied().collect();

    vec![
        ("random", random),
        ("sorted", sorted),
        ("reversed", reversed),
        ("all_equal", vec![7; len]),
        ("empty", Vec::new()),
        ("singleton", vec![42]),
    ]
}

/// Check every algorithm against every fixture
pub fn run_checks<R: Rng + ?Sized>(
    algorithms: &[&'static dyn SortAlgorithm],
    rng: &mut R,
) -> Vec<CheckOutcome> {
    let fixtures = fixtures(FIXTURE_LEN, rng);
    let mut outcomes = Vec::with_capacity(algorithms.len() * fixtures.len());
    for &algorithm in algorithms {
        for &(fixture, ref data) in &fixtures {
            let result = verify_algorithm(algorithm, data);
            if let Err(ref e) = result {
                tracing::warn!(algorithm = algorithm.name(), fixture, "check failed: {}", e);
            }
            outcomes.push(CheckOutcome {
                algorithm: algorithm.name(),
                fixture,
                result,
            });
        }
    }
    outcomes
}

/// Render outcomes grouped by algorithm
pub fn format_check_output(outcomes: &[CheckOutcome]) -> String {
    let mut output = String::new();
    output.push_str("SortBench Checks\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');

    let mut algorithms: Vec<&str> = Vec::new();
    for o in outcomes {
        if !algorithms.contains(&o.algorithm) {
            algorithms.push(o.algorithm);
        }
    }

    for algorithm in algorithms {
        let mine: Vec<&CheckOutcome> = outcomes
            .iter()
            .filter(|o| o.algorithm == algorithm)
            .collect();
        let passed = mine.iter().filter(|o| o.passed()).count();
        let icon = if passed == mine.len() { "✓" } else { "✗" };
        output.push_str(&format!(
            "  {} {:<16} {}/{} fixtures\n",
            icon,
            algorithm,
            passed,
            mine.len()
        ));
        for o in mine {
            if let Err(e) = &o.result {
                output.push_str(&format!("      {}: {}\n", o.fixture, e));
            }
        }
    }
    output
}
