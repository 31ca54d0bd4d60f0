//! Bounded-Buffer Simulation
//!
//! Wires the queue and coordination primitives to the producer and consumer
//! task loops and supervises one complete run: build the shared state, spawn
//! every task into a [`JoinSet`], and collect each task's terminal report
//! rather than discarding it with the handle.
//!
//! A run ends in one of two ways: every task reports back (normally or
//! stalled) and the caller gets a [`SimSummary`], or a task hits a fatal
//! coordination error, the remaining tasks are aborted, and the error
//! propagates for the process to exit with a distinguished status.

pub mod config;
mod consumer;
mod producer;
pub mod report;
pub mod state;

pub use config::SimConfig;
pub use report::{Role, TaskReport, TaskStatus};
pub use state::{QueueState, SharedQueue};

use crate::coord::{SyncError, SyncResult, SyncSet};
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Outcome of a finished run: one report per spawned task.
#[derive(Debug)]
pub struct SimSummary {
    pub reports: Vec<TaskReport>,
}

impl SimSummary {
    /// Jobs generated across all producers.
    pub fn produced(&self) -> usize {
        self.role_jobs(Role::Producer)
    }

    /// Jobs executed across all consumers.
    pub fn consumed(&self) -> usize {
        self.role_jobs(Role::Consumer)
    }

    /// Tasks that ended on an unexpected timeout.
    pub fn stalled(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.status == TaskStatus::Stalled)
            .count()
    }

    pub fn all_completed(&self) -> bool {
        self.stalled() == 0
    }

    fn role_jobs(&self, role: Role) -> usize {
        self.reports
            .iter()
            .filter(|r| r.role == role)
            .map(|r| r.jobs)
            .sum()
    }
}

/// Run one full simulation to completion.
pub async fn run(config: SimConfig) -> SyncResult<SimSummary> {
    let state = QueueState::new(config.capacity, config.producers);
    let shared: Arc<SharedQueue> = Arc::new(SyncSet::new(state, config.capacity)?);

    let mut tasks: JoinSet<SyncResult<TaskReport>> = JoinSet::new();

    for ordinal in 1..=config.producers {
        let rng = SmallRng::seed_from_u64(config.seed.wrapping_add(ordinal as u64));
        tasks.spawn(producer::run(
            Arc::clone(&shared),
            config.clone(),
            ordinal,
            rng,
        ));
    }
    for ordinal in 1..=config.consumers {
        tasks.spawn(consumer::run(Arc::clone(&shared), config.clone(), ordinal));
    }
    debug!(
        "spawned {} producers and {} consumers over a {}-slot queue",
        config.producers, config.consumers, config.capacity
    );

    let mut reports = Vec::with_capacity(config.producers + config.consumers);
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(report)) => reports.push(report),
            Ok(Err(fatal)) => {
                tasks.abort_all();
                return Err(fatal);
            }
            Err(join_error) => {
                tasks.abort_all();
                return Err(SyncError::TaskPanicked {
                    detail: join_error.to_string(),
                });
            }
        }
    }

    // Stable report order for logs and assertions: producers first, then
    // consumers, each by ordinal.
    reports.sort_by_key(|r| (r.role == Role::Consumer, r.ordinal));
    Ok(SimSummary { reports })
}

#[cfg(test)]
mod tests;
