//! Process startup: configuration, logging, runtime, exit codes.

use crate::app::cli::{Args, FileConfig};
use crate::core::logging::init_logging;
use crate::sim::{self, SimConfig, TaskStatus};
use clap::Parser;
use log::{error, info, warn};
use std::time::Duration;

/// All tasks finished, normally or abnormally.
pub const EXIT_OK: i32 = 0;
/// Startup could not complete (config file, logging, runtime construction).
pub const EXIT_STARTUP_FAILURE: i32 = 1;
/// The synchronisation infrastructure failed; the run was aborted.
pub const EXIT_SYNC_FAILURE: i32 = 2;

/// Parse configuration, run one simulation, and map the outcome to an exit
/// code for `main`.
pub fn run() -> i32 {
    let args = Args::parse();

    let file = match &args.config {
        Some(path) => match FileConfig::load(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("jobring: {e}");
                return EXIT_STARTUP_FAILURE;
            }
        },
        None => FileConfig::default(),
    };

    let color_enabled = if args.no_color {
        false
    } else {
        args.color || file.color.unwrap_or(true)
    };
    let log_level = args.log_level.as_deref().or(file.log_level.as_deref());
    let log_file = args.log_file.as_deref().or(file.log_file.as_deref());
    if let Err(e) = init_logging(log_level, log_file, color_enabled) {
        eprintln!("jobring: cannot initialise logging: {e}");
        return EXIT_STARTUP_FAILURE;
    }

    info!(
        "jobring {} starting (built {}, {})",
        env!("CARGO_PKG_VERSION"),
        crate::BUILD_TIME,
        crate::GIT_HASH
    );

    let config = sim_config(&args, &file);
    info!(
        "{}-slot queue, {} producers x {} jobs, {} consumers, wait timeout {:?}",
        config.capacity,
        config.producers,
        config.jobs_per_producer,
        config.consumers,
        config.wait_timeout
    );

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("cannot build async runtime: {e}");
            return EXIT_STARTUP_FAILURE;
        }
    };

    match runtime.block_on(sim::run(config)) {
        Ok(summary) => {
            info!(
                "all tasks finished: {} jobs produced, {} jobs consumed",
                summary.produced(),
                summary.consumed()
            );
            for report in summary
                .reports
                .iter()
                .filter(|r| r.status == TaskStatus::Stalled)
            {
                warn!(
                    "{} ({}) stalled after {} jobs",
                    report.role, report.ordinal, report.jobs
                );
            }
            EXIT_OK
        }
        Err(fatal) => {
            error!("FATAL: {fatal}");
            EXIT_SYNC_FAILURE
        }
    }
}

fn sim_config(args: &Args, file: &FileConfig) -> SimConfig {
    let timeout = args.timeout.or(file.timeout);
    let time_unit_ms = args.time_unit_ms.or(file.time_unit_ms);
    let seed = args
        .seed
        .or(file.seed)
        .unwrap_or_else(rand::random::<u64>);

    let mut config = SimConfig::new(
        args.queue_size as usize,
        args.jobs_per_producer as usize,
        args.producers as usize,
        args.consumers as usize,
    )
    .with_seed(seed);
    if let Some(secs) = timeout {
        config = config.with_wait_timeout(Duration::from_secs(secs));
    }
    if let Some(ms) = time_unit_ms {
        config = config.with_time_unit(Duration::from_millis(ms));
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::config::{DEFAULT_TIME_UNIT, DEFAULT_WAIT_TIMEOUT};

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("jobring").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let config = sim_config(&args(&["5", "3", "2", "2", "--seed", "1"]), &FileConfig::default());
        assert_eq!(config.capacity, 5);
        assert_eq!(config.wait_timeout, DEFAULT_WAIT_TIMEOUT);
        assert_eq!(config.time_unit, DEFAULT_TIME_UNIT);
        assert_eq!(config.seed, 1);
    }

    #[test]
    fn command_line_wins_over_config_file() {
        let file = FileConfig {
            timeout: Some(99),
            time_unit_ms: Some(500),
            seed: Some(8),
            ..FileConfig::default()
        };
        let config = sim_config(&args(&["5", "3", "2", "2", "--timeout", "7"]), &file);
        assert_eq!(config.wait_timeout, Duration::from_secs(7));
        assert_eq!(config.time_unit, Duration::from_millis(500));
        assert_eq!(config.seed, 8);
    }
}
