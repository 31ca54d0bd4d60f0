//! The synchronisation triple guarding the shared queue.

use crate::coord::counter::SlotCounter;
use crate::coord::error::{SyncError, SyncResult};
use std::sync::{Mutex, MutexGuard};

/// Exclusion lock plus the `empty`/`filled` slot counters.
///
/// `empty` starts at the queue capacity and is decremented before a producer
/// may insert; `filled` starts at zero and is decremented before a consumer
/// may remove. Between transactions `empty + filled == capacity` and `filled`
/// equals the number of queued jobs.
///
/// The lock protects the caller-supplied guarded state (queue pointers and
/// the production record) and nothing else; critical sections are short,
/// synchronous updates and are never held across a suspension point. The
/// counters themselves need no lock.
#[derive(Debug)]
pub struct SyncSet<T> {
    guarded: Mutex<T>,
    empty: SlotCounter,
    filled: SlotCounter,
}

impl<T> SyncSet<T> {
    /// Build the triple for a queue of `capacity` slots.
    pub fn new(guarded: T, capacity: usize) -> SyncResult<Self> {
        Ok(Self {
            guarded: Mutex::new(guarded),
            empty: SlotCounter::new("empty", capacity)?,
            filled: SlotCounter::new("filled", 0)?,
        })
    }

    /// Enter the critical section.
    ///
    /// A poisoned lock means a peer task panicked mid-update; the guarded
    /// state can no longer be trusted and the error is fatal.
    pub fn lock(&self) -> SyncResult<MutexGuard<'_, T>> {
        self.guarded.lock().map_err(|poison| SyncError::LockPoisoned {
            detail: format!("a task panicked inside the critical section: {poison}"),
        })
    }

    /// Counter of free queue slots.
    pub fn empty(&self) -> &SlotCounter {
        &self.empty
    }

    /// Counter of queued jobs.
    pub fn filled(&self) -> &SlotCounter {
        &self.filled
    }

    /// Sum of both counters; equals the capacity at every quiescent point.
    pub fn counted_slots(&self) -> usize {
        self.empty.available() + self.filled.available()
    }
}
