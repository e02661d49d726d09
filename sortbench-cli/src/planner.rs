//! Algorithm Planner
//!
//! Resolves the algorithm selection into the ordered list the driver runs.
//!
//! Selection options:
//! - Explicit names (`merge_sort`, or the short form `merge`)
//! - Regex pattern matching on the algorithm identifier
//!
//! Ordering: explicit names run in the order given (duplicates dropped);
//! an empty selection runs the whole registry in registry order.

use crate::config::ConfigError;
use regex::Regex;
use sortbench_core::{SortAlgorithm, algorithm_by_name, all_algorithms};

/// Ordered set of algorithms to benchmark
pub struct ExecutionPlan {
    /// Algorithms in table row order
    pub algorithms: Vec<&'static dyn SortAlgorithm>,
}

impl ExecutionPlan {
    /// Identifiers in row order
    pub fn names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }
}

/// Look up `name`, accepting the identifier with or without its `_sort` suffix
pub fn resolve_algorithm(name: &str) -> Result<&'static dyn SortAlgorithm, ConfigError> {
    let name = name.trim();
    algorithm_by_name(name)
        .or_else(|| algorithm_by_name(&format!("{}_sort", name)))
        .ok_or_else(|| ConfigError::UnknownAlgorithm(name.to_string()))
}

/// Build the execution plan from requested names and an optional filter
pub fn build_plan(names: &[String], filter: Option<&Regex>) -> Result<ExecutionPlan, ConfigError> {
    let requested: Vec<&'static dyn SortAlgorithm> = if names.is_empty() {
        all_algorithms().to_vec()
    } else {
        let mut selected: Vec<&'static dyn SortAlgorithm> = Vec::with_capacity(names.len());
        for name in names {
            let algorithm = resolve_algorithm(name)?;
            if !selected.iter().any(|a| a.name() == algorithm.name()) {
                selected.push(algorithm);
            }
        }
        selected
    };

    let algorithms: Vec<_> = requested
        .into_iter()
        .filter(|a| filter.is_none_or(|re| re.is_match(a.name())))
        .collect();

    if algorithms.is_empty() {
        return Err(ConfigError::NoAlgorithms);
    }
    Ok(ExecutionPlan { algorithms })
}
