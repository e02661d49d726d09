//! Configuration loading from sortbench.toml
//!
//! SortBench configuration can be specified in a `sortbench.toml` file in the
//! project root. The file is discovered by walking up from the current
//! directory. Every field is optional; CLI flags override file values.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Name of the configuration file looked up by [`SortbenchConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "sortbench.toml";

/// Invalid benchmark configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No input sizes to benchmark
    #[error("at least one input size is required")]
    EmptySizes,
    /// Input sizes must be positive
    #[error("input sizes must be positive")]
    ZeroSize,
    /// Averages need at least one trial
    #[error("trials must be at least 1")]
    ZeroTrials,
    /// A size range must advance
    #[error("size range step must be positive")]
    ZeroStep,
    /// Size range string is malformed
    #[error("invalid size range '{0}', expected start:end:step")]
    InvalidRange(String),
    /// Algorithm name not in the registry
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
    /// Filtering left nothing to run
    #[error("no algorithms selected")]
    NoAlgorithms,
}

/// SortBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SortbenchConfig {
    /// Benchmark parameters
    #[serde(default)]
    pub benchmark: BenchmarkSection,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input sizes, either listed or as a half-open `start..end` range with step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    /// Explicit sizes, benchmarked in the given order
    List(Vec<usize>),
    /// `start, start + step, ...` while `< end`
    Range {
        /// First size
        start: usize,
        /// Exclusive upper bound
        end: usize,
        /// Increment
        step: usize,
    },
}

impl Default for SizeSpec {
    fn default() -> Self {
        SizeSpec::Range {
            start: 100,
            end: 5000,
            step: 500,
        }
    }
}

impl SizeSpec {
    /// Expand into the ordered list of sizes
    pub fn resolve(&self) -> Result<Vec<usize>, ConfigError> {
        let sizes: Vec<usize> = match *self {
            SizeSpec::List(ref sizes) => sizes.clone(),
            SizeSpec::Range { step: 0, .. } => return Err(ConfigError::ZeroStep),
            SizeSpec::Range { start, end, step } => (start..end).step_by(step).collect(),
        };
        if sizes.is_empty() {
            return Err(ConfigError::EmptySizes);
        }
        if sizes.contains(&0) {
            return Err(ConfigError::ZeroSize);
        }
        Ok(sizes)
    }

    /// Parse `start:end:step` (step defaults to 1 when omitted)
    pub fn parse_range(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRange(s.to_string());
        let parts: Vec<&str> = s.trim().split(':').collect();
        let parse = |p: &str| p.trim().parse::<usize>().map_err(|_| invalid());

        match parts.as_slice() {
            [start, end] => Ok(SizeSpec::Range {
                start: parse(start)?,
                end: parse(end)?,
                step: 1,
            }),
            [start, end, step] => Ok(SizeSpec::Range {
                start: parse(start)?,
                end: parse(end)?,
                step: parse(step)?,
            }),
            _ => Err(invalid()),
        }
    }
}

/// Benchmark parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSection {
    /// Input sizes
    #[serde(default)]
    pub sizes: SizeSpec,
    /// Timed trials per (algorithm, size) cell
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Algorithms to run (empty = all)
    #[serde(default)]
    pub algorithms: Vec<String>,
    /// Seed for reproducible inputs
    #[serde(default)]
    pub seed: Option<u64>,
    /// Check every timed output with `is_sorted`
    #[serde(default = "default_validate")]
    pub validate: bool,
    /// Worker threads for independent cells (1 = sequential)
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl Default for BenchmarkSection {
    fn default() -> Self {
        Self {
            sizes: SizeSpec::default(),
            trials: default_trials(),
            algorithms: Vec::new(),
            seed: None,
            validate: default_validate(),
            jobs: default_jobs(),
        }
    }
}

fn default_trials() -> usize {
    1
}
fn default_validate() -> bool {
    true
}
fn default_jobs() -> usize {
    1
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory `--save` writes reports into
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Show a progress bar while running
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            directory: default_output_dir(),
            progress: default_progress(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_output_dir() -> String {
    "target/sortbench".to_string()
}
fn default_progress() -> bool {
    true
}

impl SortbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for [`CONFIG_FILE_NAME`]
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!("ignoring {}: {}", config_path.display(), e);
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# SortBench Configuration

[benchmark]
# Input sizes: a range (end exclusive) or an explicit list
sizes = { start = 100, end = 5000, step = 500 }
# sizes = [100, 1000, 10000]
# Timed trials per algorithm per size; the table records their mean
trials = 1
# Algorithms to run (empty = all)
algorithms = []
# Seed for reproducible inputs (uncomment to enable)
# seed = 42
# Check each timed output is sorted
validate = true
# Worker threads for independent cells (1 = sequential)
jobs = 1

[output]
# Default output format: human, json, csv
format = "human"
# Directory for saved reports
directory = "target/sortbench"
# Show a progress bar
progress = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SortbenchConfig::default();
        assert_eq!(config.benchmark.trials, 1);
        assert!(config.benchmark.validate);
        assert_eq!(config.benchmark.jobs, 1);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_default_sizes_range() {
        let sizes = SizeSpec::default().resolve().unwrap();
        assert_eq!(
            sizes,
            vec![100, 600, 1100, 1600, 2100, 2600, 3100, 3600, 4100, 4600]
        );
    }

    #[test]
    fn test_size_spec_errors() {
        assert_eq!(SizeSpec::List(vec![]).resolve(), Err(ConfigError::EmptySizes));
        assert_eq!(SizeSpec::List(vec![10, 0]).resolve(), Err(ConfigError::ZeroSize));
        assert_eq!(
            SizeSpec::Range {
                start: 1,
                end: 10,
                step: 0
            }
            .resolve(),
            Err(ConfigError::ZeroStep)
        );
        assert_eq!(
            SizeSpec::Range {
                start: 10,
                end: 10,
                step: 1
            }
            .resolve(),
            Err(ConfigError::EmptySizes)
        );
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            SizeSpec::parse_range("100:5000:500").unwrap(),
            SizeSpec::Range {
                start: 100,
                end: 5000,
                step: 500
            }
        );
        assert_eq!(
            SizeSpec::parse_range("1:4").unwrap().resolve().unwrap(),
            vec![1, 2, 3]
        );
        assert!(matches!(
            SizeSpec::parse_range("100"),
            Err(ConfigError::InvalidRange(_))
        ));
        assert!(SizeSpec::parse_range("a:b:c").is_err());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [benchmark]
            sizes = [10, 20, 30]
            trials = 5
            algorithms = ["merge_sort", "heap_sort"]
            seed = 7
        "#;

        let config: SortbenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.benchmark.sizes, SizeSpec::List(vec![10, 20, 30]));
        assert_eq!(config.benchmark.trials, 5);
        assert_eq!(config.benchmark.algorithms, vec!["merge_sort", "heap_sort"]);
        assert_eq!(config.benchmark.seed, Some(7));
        // Defaults should still apply
        assert!(config.benchmark.validate);
        assert_eq!(config.output.directory, "target/sortbench");
    }

    #[test]
    fn test_default_toml_parses() {
        let config: SortbenchConfig = toml::from_str(&SortbenchConfig::default_toml()).unwrap();
        assert_eq!(config.benchmark.sizes, SizeSpec::default());
        assert_eq!(config.benchmark.seed, None);
    }

    #[test]
    fn test_discover_walks_up() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[benchmark]\ntrials = 9\n",
        )
        .unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = SortbenchConfig::discover_from(&nested).unwrap();
        assert_eq!(config.benchmark.trials, 9);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[benchmark]\ntrials = \"many\"\n").unwrap();
        assert!(SortbenchConfig::load(&path).is_err());
    }
}
