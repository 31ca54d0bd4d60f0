//! Counting semaphore with timeout-capable waits.

use crate::coord::error::{SyncError, SyncResult};
use std::time::Duration;
use tokio::sync::Semaphore;

/// A named counting semaphore.
///
/// The counter's value is the number of permits held by the underlying
/// [`tokio::sync::Semaphore`]. [`wait`](SlotCounter::wait) blocks until the
/// value is positive and decrements it; [`signal`](SlotCounter::signal)
/// increments it and wakes at most one blocked waiter. Wake order among
/// blocked waiters is unspecified.
#[derive(Debug)]
pub struct SlotCounter {
    name: &'static str,
    permits: Semaphore,
}

impl SlotCounter {
    /// Create a counter with `initial` as its starting value.
    ///
    /// Fails if `initial` exceeds the runtime's permit ceiling; counter
    /// creation failure is fatal to the whole simulation.
    pub fn new(name: &'static str, initial: usize) -> SyncResult<Self> {
        if initial > Semaphore::MAX_PERMITS {
            return Err(SyncError::CounterOverflow {
                counter: name,
                requested: initial,
            });
        }
        Ok(Self {
            name,
            permits: Semaphore::new(initial),
        })
    }

    /// Block until the counter is positive, then decrement it.
    pub async fn wait(&self) -> SyncResult<()> {
        match self.permits.acquire().await {
            Ok(permit) => {
                permit.forget();
                Ok(())
            }
            Err(_) => Err(SyncError::Closed { counter: self.name }),
        }
    }

    /// As [`wait`](SlotCounter::wait), but give up after `limit`.
    ///
    /// An elapsed wait leaves the counter unchanged and reports
    /// [`SyncError::Timeout`], which callers treat as a recoverable signal.
    pub async fn wait_timeout(&self, limit: Duration) -> SyncResult<()> {
        match tokio::time::timeout(limit, self.permits.acquire()).await {
            Ok(Ok(permit)) => {
                permit.forget();
                Ok(())
            }
            Ok(Err(_)) => Err(SyncError::Closed { counter: self.name }),
            Err(_) => Err(SyncError::Timeout {
                counter: self.name,
                waited: limit,
            }),
        }
    }

    /// Increment the counter, waking at most one blocked waiter. Never blocks.
    pub fn signal(&self) {
        self.permits.add_permits(1);
    }

    /// Current value, for diagnostics and invariant checks.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn wait_decrements_the_counter() {
        let counter = SlotCounter::new("empty", 3).unwrap();
        counter.wait().await.unwrap();
        counter.wait().await.unwrap();
        assert_eq!(counter.available(), 1);
    }

    #[tokio::test]
    async fn signal_increments_and_never_blocks() {
        let counter = SlotCounter::new("filled", 0).unwrap();
        counter.signal();
        counter.signal();
        assert_eq!(counter.available(), 2);
    }

    #[tokio::test]
    async fn signal_wakes_a_blocked_waiter() {
        let counter = Arc::new(SlotCounter::new("filled", 0).unwrap());
        let waiter = {
            let counter = Arc::clone(&counter);
            tokio::spawn(async move { counter.wait().await })
        };
        // Let the waiter reach the queue before signalling.
        tokio::task::yield_now().await;
        counter.signal();
        waiter.await.unwrap().unwrap();
        assert_eq!(counter.available(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn timed_wait_succeeds_before_the_deadline() {
        let counter = Arc::new(SlotCounter::new("filled", 0).unwrap());
        let waiter = {
            let counter = Arc::clone(&counter);
            tokio::spawn(
                async move { counter.wait_timeout(Duration::from_secs(10)).await },
            )
        };
        tokio::time::sleep(Duration::from_secs(1)).await;
        counter.signal();
        waiter.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn timed_wait_reports_timeout_and_leaves_value_unchanged() {
        let counter = SlotCounter::new("filled", 0).unwrap();
        let result = counter.wait_timeout(Duration::from_secs(5)).await;
        match result {
            Err(SyncError::Timeout { counter: name, waited }) => {
                assert_eq!(name, "filled");
                assert_eq!(waited, Duration::from_secs(5));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
        assert_eq!(counter.available(), 0);

        // A later signal is still observed in full.
        counter.signal();
        assert_eq!(counter.available(), 1);
    }

    #[tokio::test]
    async fn creation_rejects_values_beyond_the_permit_ceiling() {
        let result = SlotCounter::new("empty", Semaphore::MAX_PERMITS + 1);
        match result {
            Err(SyncError::CounterOverflow { counter, requested }) => {
                assert_eq!(counter, "empty");
                assert_eq!(requested, Semaphore::MAX_PERMITS + 1);
            }
            other => panic!("expected overflow error, got {other:?}"),
        }
    }

    #[test]
    fn timeouts_are_recoverable_and_everything_else_is_fatal() {
        let timeout = SyncError::Timeout {
            counter: "filled",
            waited: Duration::from_secs(1),
        };
        assert!(!timeout.is_fatal());
        assert!(SyncError::Closed { counter: "empty" }.is_fatal());
        assert!(SyncError::LockPoisoned {
            detail: "panic".into()
        }
        .is_fatal());
    }
}
