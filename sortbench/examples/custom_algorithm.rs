//! Timing a user-defined algorithm
//!
//! Implements Shell sort behind `SortAlgorithm`, checks it, then times it
//! next to the built-in insertion sort it generalizes.
//!
//! Run with:
//!   cargo run --example custom_algorithm

use rand::SeedableRng;
use rand::rngs::StdRng;
use sortbench::{
    AlgorithmInfo, Element, InsertionSort, SortAlgorithm, SortError, avg_sort_time, format_secs,
    rand_list, verify_algorithm,
};

/// Shell sort with Ciura's gap sequence
struct ShellSort;

const GAPS: [usize; 8] = [701, 301, 132, 57, 23, 10, 4, 1];

impl SortAlgorithm for ShellSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            name: "shell_sort",
            worst_case: "O(N^1.5)",
            extra_space: "O(1)",
            stable: false,
        }
    }

    fn sort<'a>(&self, seq: &'a mut [Element]) -> Result<&'a mut [Element], SortError> {
        let len = seq.len();
        for gap in GAPS.into_iter().filter(|&g| g < len.max(2)) {
            for i in gap..seq.len() {
                let mut j = i;
                while j >= gap && seq[j - gap] > seq[j] {
                    seq.swap(j - gap, j);
                    j -= gap;
                }
            }
        }
        Ok(seq)
    }
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let fixture = rand_list(1000, &mut rng);
    if let Err(e) = verify_algorithm(&ShellSort, &fixture) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    for n in [100, 1000, 5000] {
        let mut data = rand_list(n, &mut rng);
        let algorithms: [&dyn SortAlgorithm; 2] = [&InsertionSort, &ShellSort];
        for alg in algorithms {
            match avg_sort_time(alg, &mut data, 20, &mut rng) {
                Ok(avg) => println!(
                    "{:<16} n={:<6} {}",
                    alg.name(),
                    n,
                    format_secs(avg.as_secs_f64())
                ),
                Err(e) => eprintln!("{} failed: {}", alg.name(), e),
            }
        }
    }
}
