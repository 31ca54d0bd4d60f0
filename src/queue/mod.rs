//! Bounded Job Queue Component
//!
//! A fixed-capacity circular queue of simulated job durations, shared by the
//! producer and consumer tasks of the simulation.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐            ┌────────────┐
//! │ Producer 1 │    ...     │ Producer P │
//! └─────┬──────┘            └─────┬──────┘
//!       │ push_tail               │ push_tail
//!       ▼                         ▼
//! ┌─────────────────────────────────────────┐
//! │        JobRing (capacity C slots)       │
//! │        ┌───┬───┬───┬───┬───┬───┐        │
//! │        │ 4 │ 9 │ 2 │   │   │   │        │
//! │        └───┴───┴───┴───┴───┴───┘        │
//! │          ▲ head        ▲ tail           │
//! └─────────────────────────────────────────┘
//!       │ pop_head                │ pop_head
//! ┌─────┴──────┐            ┌─────┴──────┐
//! │ Consumer 1 │    ...     │ Consumer M │
//! └────────────┘            └────────────┘
//! ```
//!
//! The ring performs no occupancy enforcement of its own: the counters in
//! [`crate::coord`] guarantee a free slot before every push and a pending job
//! before every pop, and the exclusion lock serialises the head/tail updates.

mod ring;

pub use ring::JobRing;
