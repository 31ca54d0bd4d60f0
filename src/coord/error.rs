//! Coordination Error Types

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("cannot create counter '{counter}' with {requested} slots (exceeds runtime limit)")]
    CounterOverflow {
        counter: &'static str,
        requested: usize,
    },

    #[error("counter '{counter}' was closed while tasks were still running")]
    Closed { counter: &'static str },

    #[error("shared state lock poisoned: {detail}")]
    LockPoisoned { detail: String },

    #[error("worker task panicked: {detail}")]
    TaskPanicked { detail: String },

    #[error("wait on counter '{counter}' timed out after {waited:?}")]
    Timeout {
        counter: &'static str,
        waited: Duration,
    },
}

impl SyncError {
    /// Timeouts are recoverable signals interpreted by the waiting task;
    /// everything else tears the process down.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SyncError::Timeout { .. })
    }
}

/// Result type for coordination operations
pub type SyncResult<T> = Result<T, SyncError>;
