#![warn(missing_docs)]
//! SortBench CLI Library
//!
//! Configuration, driver and terminal front-end for the `sortbench` binary.
//! Use `sortbench::run()` (or `sortbench_cli::run()`) in a main function to
//! get the full CLI.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = sortbench_cli::run() {
//!         eprintln!("Error: {e}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod checks;
mod config;
mod driver;
mod formatting;
mod metadata;
mod planner;
mod report;

pub use checks::{CheckOutcome, FIXTURE_LEN, fixtures, format_check_output, run_checks};
pub use config::*;
pub use driver::{BenchmarkConfig, BenchmarkRun, cell_rng, default_input_sizes, run_benchmark};
pub use formatting::format_human_output;
pub use metadata::{build_report_meta, system_info};
pub use planner::{ExecutionPlan, build_plan, resolve_algorithm};
pub use report::{BASELINE_ALGORITHM, build_report};

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use regex::Regex;
use sortbench_report::{OutputFormat, Report, generate_csv_report, generate_json_report};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// SortBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about = "SortBench - sorting algorithm benchmarks")]
pub struct Cli {
    /// Optional subcommand (Run, List, Check); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Algorithms to run, comma separated (default: all)
    #[arg(long, value_delimiter = ',', global = true)]
    pub algorithms: Vec<String>,

    /// Filter algorithms by regex pattern
    #[arg(long, global = true)]
    pub filter: Option<String>,

    /// Input sizes, comma separated
    #[arg(long, value_delimiter = ',', conflicts_with = "range")]
    pub sizes: Vec<usize>,

    /// Input sizes as start:end:step (end exclusive)
    #[arg(long)]
    pub range: Option<String>,

    /// Timed trials per algorithm per size
    #[arg(long, short = 'n')]
    pub trials: Option<usize>,

    /// Seed for reproducible inputs
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Worker threads for independent cells
    #[arg(long, short = 'j')]
    pub jobs: Option<usize>,

    /// Skip checking that each timed output is sorted
    #[arg(long)]
    pub no_validate: bool,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also save the JSON report into the configured output directory
    #[arg(long)]
    pub save: bool,

    /// Configuration file (default: discover sortbench.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the benchmark (default)
    Run,
    /// List available algorithms
    List,
    /// Verify every selected algorithm on fixed input shapes
    Check,
    /// Print a default sortbench.toml
    Init,
}

/// Run the SortBench CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the SortBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    // CLI flags override sortbench.toml, which overrides defaults
    let file_config = match cli.config {
        Some(ref path) => SortbenchConfig::load(path)?,
        None => SortbenchConfig::discover().unwrap_or_default(),
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_benchmarks(&cli, &file_config),
        Commands::List => list_algorithms(&cli, &file_config),
        Commands::Check => check_algorithms(&cli, &file_config),
        Commands::Init => {
            print!("{}", SortbenchConfig::default_toml());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "sortbench=debug"
    } else {
        "sortbench=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve the algorithm selection from CLI and file, applying `--filter`
fn resolve_plan(cli: &Cli, file: &SortbenchConfig) -> anyhow::Result<ExecutionPlan> {
    let names = if cli.algorithms.is_empty() {
        &file.benchmark.algorithms
    } else {
        &cli.algorithms
    };
    let filter = cli
        .filter
        .as_deref()
        .map(Regex::new)
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid --filter pattern: {}", e))?;
    Ok(build_plan(names, filter.as_ref())?)
}

/// Build a BenchmarkConfig by layering: sortbench.toml → CLI overrides.
pub fn build_benchmark_config(
    cli: &Cli,
    file: &SortbenchConfig,
) -> anyhow::Result<BenchmarkConfig> {
    let sizes = if !cli.sizes.is_empty() {
        SizeSpec::List(cli.sizes.clone())
    } else if let Some(ref range) = cli.range {
        SizeSpec::parse_range(range)?
    } else {
        file.benchmark.sizes.clone()
    };

    let plan = resolve_plan(cli, file)?;
    let config = BenchmarkConfig {
        input_sizes: sizes.resolve()?,
        trials: cli.trials.unwrap_or(file.benchmark.trials),
        algorithms: plan.names().into_iter().map(String::from).collect(),
        seed: cli.seed.or(file.benchmark.seed),
        validate: file.benchmark.validate && !cli.no_validate,
        jobs: cli.jobs.unwrap_or(file.benchmark.jobs).max(1),
    };
    config.validate()?;
    Ok(config)
}

fn run_benchmarks(cli: &Cli, file: &SortbenchConfig) -> anyhow::Result<()> {
    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(file.output.format.as_str())
        .parse()
        .map_err(anyhow::Error::msg)?;
    let config = build_benchmark_config(cli, file)?;

    let cells = config.input_sizes.len() * config.algorithms.len();
    let pb = if cli.no_progress || !file.output.progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(cells as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let run = run_benchmark(&config, |m| {
        pb.set_message(format!("{} (n={})", m.algorithm, m.size));
        pb.inc(1);
    });
    pb.finish_with_message("Complete");
    let run = run?;

    let report = build_report(&run, &config);
    let output = render(&report, format)?;

    // Write output
    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    if cli.save {
        save_report(&report, &file.output.directory)?;
    }

    Ok(())
}

/// Render a report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Csv => generate_csv_report(&report.table),
        OutputFormat::Human => format_human_output(report),
    })
}

/// Write the JSON report to `<directory>/report.json`
fn save_report(report: &Report, directory: &str) -> anyhow::Result<PathBuf> {
    let dir = PathBuf::from(directory);
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("report.json");
    std::fs::write(&path, generate_json_report(report)?)?;
    eprintln!("Report saved to: {}", path.display());
    Ok(path)
}

fn list_algorithms(cli: &Cli, file: &SortbenchConfig) -> anyhow::Result<()> {
    println!("SortBench Algorithms:");

    let plan = resolve_plan(cli, file)?;
    let width = plan
        .algorithms
        .iter()
        .map(|a| a.name().len())
        .max()
        .unwrap_or(12);

    for alg in &plan.algorithms {
        let info = alg.info();
        println!(
            "├── {:<width$}  worst: {:<12} space: {:<10} {}",
            info.name,
            info.worst_case,
            info.extra_space,
            if info.stable { "stable" } else { "unstable" },
            width = width
        );
    }
    println!("{} algorithms found.", plan.algorithms.len());
    Ok(())
}

fn check_algorithms(cli: &Cli, file: &SortbenchConfig) -> anyhow::Result<()> {
    let plan = resolve_plan(cli, file)?;
    let mut rng = match cli.seed.or(file.benchmark.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let outcomes = run_checks(&plan.algorithms, &mut rng);
    print!("{}", format_check_output(&outcomes));

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        anyhow::bail!("{} check(s) failed", failed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sortbench").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_follow_file_config() {
        let cli = parse(&[]);
        let config = build_benchmark_config(&cli, &SortbenchConfig::default()).unwrap();
        assert_eq!(config.input_sizes, default_input_sizes());
        assert_eq!(config.trials, 1);
        assert_eq!(config.algorithms.len(), 8);
        assert!(config.validate);
        assert_eq!(config.jobs, 1);
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = parse(&[
            "--algorithms",
            "merge,quick",
            "--sizes",
            "10,20",
            "--trials",
            "3",
            "--seed",
            "9",
            "--no-validate",
            "-j",
            "2",
        ]);
        let mut file = SortbenchConfig::default();
        file.benchmark.trials = 50;
        file.benchmark.seed = Some(1);

        let config = build_benchmark_config(&cli, &file).unwrap();
        assert_eq!(config.algorithms, vec!["merge_sort", "quick_sort"]);
        assert_eq!(config.input_sizes, vec![10, 20]);
        assert_eq!(config.trials, 3);
        assert_eq!(config.seed, Some(9));
        assert!(!config.validate);
        assert_eq!(config.jobs, 2);
    }

    #[test]
    fn test_range_flag() {
        let cli = parse(&["--range", "100:400:100"]);
        let config = build_benchmark_config(&cli, &SortbenchConfig::default()).unwrap();
        assert_eq!(config.input_sizes, vec![100, 200, 300]);
    }

    #[test]
    fn test_sizes_conflict_with_range() {
        let result = Cli::try_parse_from(["sortbench", "--sizes", "1", "--range", "1:2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_applies() {
        let cli = parse(&["--filter", "^(insertion|selection)"]);
        let config = build_benchmark_config(&cli, &SortbenchConfig::default()).unwrap();
        assert_eq!(config.algorithms, vec!["selection_sort", "insertion_sort"]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = SortbenchConfig::default();
        assert!(build_benchmark_config(&parse(&["--trials", "0"]), &file).is_err());
        assert!(build_benchmark_config(&parse(&["--algorithms", "bogo"]), &file).is_err());
        assert!(build_benchmark_config(&parse(&["--filter", "("]), &file).is_err());
        assert!(build_benchmark_config(&parse(&["--range", "5:1:1"]), &file).is_err());
    }

    #[test]
    fn test_subcommands_parse() {
        assert_eq!(parse(&["list"]).command, Some(Commands::List));
        assert_eq!(parse(&["check", "--seed", "3"]).command, Some(Commands::Check));
        assert_eq!(parse(&[]).command, None);
    }

    #[test]
    fn test_render_formats() {
        let cli = parse(&["--algorithms", "insertion,reference", "--sizes", "5,10"]);
        let config = build_benchmark_config(&cli, &SortbenchConfig::default()).unwrap();
        let run = run_benchmark(&config, |_| {}).unwrap();
        let report = build_report(&run, &config);

        let csv = render(&report, OutputFormat::Csv).unwrap();
        assert!(csv.starts_with("size,insertion_sort,reference_sort\n"));
        assert_eq!(csv.lines().count(), 3);

        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["table"]["input_sizes"][1], 10);

        let human = render(&report, OutputFormat::Human).unwrap();
        assert!(human.contains("Average Sort Time"));
    }

    #[test]
    fn test_save_report() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse(&["--algorithms", "heap", "--sizes", "4"]);
        let config = build_benchmark_config(&cli, &SortbenchConfig::default()).unwrap();
        let run = run_benchmark(&config, |_| {}).unwrap();
        let report = build_report(&run, &config);

        let target = dir.path().join("nested");
        let path = save_report(&report, target.to_str().unwrap()).unwrap();
        assert!(path.exists());
        let saved: Report = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(saved.cells.len(), 1);
    }
}
