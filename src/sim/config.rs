//! Simulation parameters.

use std::time::Duration;

/// How long a timed wait may block before the waiting task gives up.
/// One process-wide constant; never varied per call.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Real time standing in for one second of simulated work.
pub const DEFAULT_TIME_UNIT: Duration = Duration::from_secs(1);

/// Job durations are drawn uniformly from `1..=MAX_JOB_DURATION` time units.
pub const MAX_JOB_DURATION: u64 = 10;

/// Producers pause `1..=MAX_THINK_TIME` time units between jobs.
pub const MAX_THINK_TIME: u64 = 5;

/// Startup configuration for one simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Queue capacity C.
    pub capacity: usize,
    /// Jobs each producer generates before finishing.
    pub jobs_per_producer: usize,
    /// Producer task count P.
    pub producers: usize,
    /// Consumer task count M.
    pub consumers: usize,
    /// Timed-wait limit shared by every task.
    pub wait_timeout: Duration,
    /// Scale for simulated job work and producer think time.
    pub time_unit: Duration,
    /// Seed for the per-task job generators; fixed seed, fixed run.
    pub seed: u64,
}

impl SimConfig {
    pub fn new(
        capacity: usize,
        jobs_per_producer: usize,
        producers: usize,
        consumers: usize,
    ) -> Self {
        Self {
            capacity,
            jobs_per_producer,
            producers,
            consumers,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            time_unit: DEFAULT_TIME_UNIT,
            seed: 0,
        }
    }

    pub fn with_wait_timeout(mut self, wait_timeout: Duration) -> Self {
        self.wait_timeout = wait_timeout;
        self
    }

    pub fn with_time_unit(mut self, time_unit: Duration) -> Self {
        self.time_unit = time_unit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total jobs the producer side will generate.
    pub fn expected_jobs(&self) -> usize {
        self.producers * self.jobs_per_producer
    }
}
