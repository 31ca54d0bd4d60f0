//! Consumer task loop.

use crate::coord::{SyncError, SyncResult};
use crate::sim::config::SimConfig;
use crate::sim::report::{Role, TaskReport};
use crate::sim::state::SharedQueue;
use log::{info, warn};
use std::sync::Arc;
use tokio::time::sleep;

/// Drain and execute jobs until production ends or the queue stalls.
///
/// The timed wait on `filled` carries the one real design decision in the
/// system: when it expires, a set production-finished flag means the quiet
/// queue is permanent and the consumer is done; a clear flag means something
/// upstream is stuck, and the consumer ends abnormally rather than blocking
/// forever.
pub(crate) async fn run(
    shared: Arc<SharedQueue>,
    config: SimConfig,
    ordinal: usize,
) -> SyncResult<TaskReport> {
    let mut consumed = 0;

    loop {
        match shared.filled().wait_timeout(config.wait_timeout).await {
            Ok(()) => {}
            Err(SyncError::Timeout { .. }) => {
                if shared.lock()?.progress.all_finished() {
                    info!("Consumer ({ordinal}): no more jobs left");
                    return Ok(TaskReport::completed(Role::Consumer, ordinal, consumed));
                }
                warn!("Consumer ({ordinal}): timeout");
                return Ok(TaskReport::stalled(Role::Consumer, ordinal, consumed));
            }
            Err(fatal) => return Err(fatal),
        }

        let job = {
            let mut state = shared.lock()?;
            let job_id = state.ring.head_slot();
            state.ring.pop_head().zip(job_id)
        };

        let (duration, job_id) = match job {
            Some(job) => job,
            None => {
                // Counter accounting said a job was queued; absorb the
                // phantom credit and keep draining.
                warn!("Consumer ({ordinal}): queue unexpectedly empty");
                continue;
            }
        };

        shared.empty().signal();
        consumed += 1;

        info!("Consumer ({ordinal}): job id {job_id} executing sleep duration {duration}");
        sleep(config.time_unit * duration as u32).await;
        info!("Consumer ({ordinal}): job id {job_id} completed");
    }
}
