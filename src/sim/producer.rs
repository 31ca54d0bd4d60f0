//! Producer task loop.

use crate::coord::{SyncError, SyncResult};
use crate::sim::config::{SimConfig, MAX_JOB_DURATION, MAX_THINK_TIME};
use crate::sim::report::{Role, TaskReport};
use crate::sim::state::SharedQueue;
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::Rng;
use std::sync::Arc;
use tokio::time::sleep;

/// Generate and queue jobs until the quota is exhausted.
///
/// A timed-out wait for a free slot ends this task abnormally but leaves the
/// rest of the system running; jobs already queued stay queued. Fatal
/// coordination errors propagate to the runner.
pub(crate) async fn run(
    shared: Arc<SharedQueue>,
    config: SimConfig,
    ordinal: usize,
    mut rng: SmallRng,
) -> SyncResult<TaskReport> {
    let mut produced = 0;

    while produced < config.jobs_per_producer {
        let duration = rng.gen_range(1..=MAX_JOB_DURATION);

        match shared.empty().wait_timeout(config.wait_timeout).await {
            Ok(()) => {}
            Err(SyncError::Timeout { .. }) => {
                warn!("Producer ({ordinal}): timeout");
                return Ok(TaskReport::stalled(Role::Producer, ordinal, produced));
            }
            Err(fatal) => return Err(fatal),
        }

        let job_id = shared.lock()?.ring.push_tail(duration);
        produced += 1;

        match job_id {
            Some(job_id) => {
                shared.filled().signal();
                info!("Producer ({ordinal}): job id {job_id} duration {duration}");
            }
            None => {
                // Counter accounting said a slot was free; return the claimed
                // slot credit so empty + filled still covers the capacity.
                shared.empty().signal();
                warn!("Producer ({ordinal}): job dropped, queue unexpectedly full");
            }
        }

        let think_time = rng.gen_range(1..=MAX_THINK_TIME);
        sleep(config.time_unit * think_time as u32).await;
    }

    shared.lock()?.progress.producer_finished();
    info!("Producer ({ordinal}): no more jobs to generate");
    Ok(TaskReport::completed(Role::Producer, ordinal, produced))
}
