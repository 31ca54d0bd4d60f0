//! Coordination Primitives
//!
//! The synchronisation protocol at the heart of the simulation: a pair of
//! counting semaphores tracking free and occupied queue slots, an exclusion
//! lock around the shared queue state, and the production-progress record
//! consumers consult to tell a drained queue from a stalled one.
//!
//! Waits on the counters are the only blocking operations in the system and
//! come in two flavours: unbounded [`SlotCounter::wait`] and the
//! timeout-capable [`SlotCounter::wait_timeout`] the task loops rely on for
//! stall detection. A timeout is a recoverable signal; every other
//! [`SyncError`] is fatal to the whole process.

mod counter;
mod error;
mod progress;
mod set;

pub use counter::SlotCounter;
pub use error::{SyncError, SyncResult};
pub use progress::ProductionProgress;
pub use set::SyncSet;
