//! `er-dispatch` — the dispatch loop: scheduler → route finder → ledger.
//!
//! # One dispatch
//!
//! ```text
//! process_next():
//!   ① Dequeue  — most urgent incident from IncidentScheduler
//!                (EmptyQueue if none).
//!   ② Route    — RouteFinder::find_nearest_facility(location, kind)
//!                over the shared, read-only CityGraph.
//!   ③ Record   — on success build a DispatchRecord, push it onto the
//!                DispatchLedger, return Dispatched(record).
//!                If no facility is reachable return Unreachable(incident);
//!                nothing is recorded and nothing is retried.
//! ```
//!
//! Steps ①–③ run under one lock, so concurrent callers never interleave two
//! dispatches.  The graph sits outside the lock behind an `Arc`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use er_city::DijkstraRouteFinder;
//! use er_dispatch::{DispatchCoordinator, NoopObserver};
//!
//! let coordinator = DispatchCoordinator::new(Arc::new(graph), DijkstraRouteFinder);
//! for incident in incidents {
//!     coordinator.submit(incident)?;
//! }
//! let summary = coordinator.run_until_empty(&mut NoopObserver)?;
//! ```

pub mod coordinator;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod record;


pub use coordinator::{DispatchCoordinator, DispatchOutcome, DispatchSummary};
pub use error::{DispatchError, DispatchResult};
pub use ledger::DispatchLedger;
pub use observer::{DispatchObserver, NoopObserver};
pub use record::DispatchRecord;
