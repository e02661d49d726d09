//! System Metadata Collection
//!
//! Collects the host description and run configuration recorded in every
//! report. The CPU model is read from `/proc/cpuinfo` and degrades to
//! "Unknown" on other platforms.

use crate::driver::BenchmarkConfig;
use chrono::Utc;
use sortbench_report::{ReportConfig, ReportMeta, SCHEMA_VERSION, SystemInfo};

/// Build report metadata for a run of `config` that used `seed`
pub fn build_report_meta(config: &BenchmarkConfig, seed: u64) -> ReportMeta {
    ReportMeta {
        schema_version: SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system: system_info(),
        config: ReportConfig {
            input_sizes: config.input_sizes.clone(),
            trials: config.trials,
            seed: Some(seed),
            validate: config.validate,
            jobs: config.jobs.max(1),
        },
    }
}

/// Describe the current host
pub fn system_info() -> SystemInfo {
    SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: get_cpu_model().unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: num_cpus(),
    }
}

/// Get CPU model name from /proc/cpuinfo (Linux only)
fn get_cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("model name"))
                    .and_then(|l| l.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}
