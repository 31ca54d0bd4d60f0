//! State shared by every task, guarded by the synchronisation set.

use crate::coord::{ProductionProgress, SyncSet};
use crate::queue::JobRing;

/// Everything the exclusion lock protects: the ring's head/tail bookkeeping
/// and the production record. The slot counters live outside the lock.
#[derive(Debug)]
pub struct QueueState {
    pub ring: JobRing,
    pub progress: ProductionProgress,
}

impl QueueState {
    pub fn new(capacity: usize, producers: usize) -> Self {
        Self {
            ring: JobRing::new(capacity),
            progress: ProductionProgress::new(producers),
        }
    }
}

/// The shared handle each task receives.
pub type SharedQueue = SyncSet<QueueState>;
