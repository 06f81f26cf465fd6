//! `er-schedule` — incidents and the severity-ordered incident queue.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`incident`]  | `Incident`, `ArrivalStamp`                                |
//! | [`scheduler`] | `IncidentScheduler` (`BTreeMap<QueueKey, Incident>`)      |
//! | [`loader`]    | `load_incidents_csv`, `load_incidents_reader`             |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Ordering model (summary)
//!
//! ```text
//! key = (severity rank, arrival stamp, enqueue sequence)   ascending
//! ```
//!
//! Severity dominates; within a severity band the earliest arrival goes
//! first.  Arrival stamps come from a process-wide atomic counter, never the
//! wall clock, so two back-to-back enqueues are always strictly ordered.

pub mod error;
pub mod incident;
pub mod loader;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use incident::{ArrivalStamp, Incident};
pub use loader::{load_incidents_csv, load_incidents_reader};
pub use scheduler::IncidentScheduler;
