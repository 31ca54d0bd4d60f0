//! Command-line argument surface.

use clap::Parser;
use std::path::PathBuf;

/// Bounded-buffer producer/consumer simulation over a shared job queue.
#[derive(Parser, Debug)]
#[command(name = "jobring", version, about)]
pub struct Args {
    /// Number of slots in the shared job queue
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub queue_size: u32,

    /// Jobs each producer generates before finishing
    pub jobs_per_producer: u32,

    /// Number of producer tasks
    pub producers: u32,

    /// Number of consumer tasks
    pub consumers: u32,

    /// Seconds a task may wait on the queue before giving up
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Milliseconds of real time per simulated work unit
    #[arg(long, value_name = "MS")]
    pub time_unit_ms: Option<u64>,

    /// Seed for the job generators; omit for a different run every time
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Also write log lines to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<String>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// TOML file with defaults for the tuning and logging flags
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
