//! Dispatch observer trait for progress reporting and data collection.

use er_schedule::Incident;

use crate::{DispatchRecord, DispatchSummary};

/// Callbacks invoked by
/// [`DispatchCoordinator::run_until_empty`][crate::DispatchCoordinator::run_until_empty]
/// for every outcome.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait DispatchObserver {
    /// A facility was assigned and the record pushed onto the ledger.
    fn on_dispatched(&mut self, _record: &DispatchRecord) {}

    /// No facility of the required type is reachable from the incident.
    /// The incident is handed back here; re-queuing is the caller's call.
    fn on_unreachable(&mut self, _incident: &Incident) {}

    /// Called once when the queue runs dry.
    fn on_drained(&mut self, _summary: &DispatchSummary) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
