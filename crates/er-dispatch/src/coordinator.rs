//! The `DispatchCoordinator` and its drain loop.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use er_city::{CityError, CityGraph, RouteFinder};
use er_schedule::{Incident, IncidentScheduler};

use crate::{DispatchError, DispatchLedger, DispatchObserver, DispatchRecord, DispatchResult};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// What happened to one dequeued incident.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// A facility was assigned; the record is also on the ledger.
    Dispatched(DispatchRecord),
    /// No facility of the required type is connected to the incident's
    /// location.  Nothing was recorded; the incident is returned so the
    /// caller can decide whether to re-submit it.
    Unreachable(Incident),
}

impl DispatchOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, DispatchOutcome::Dispatched(_))
    }
}

/// Counts from one [`DispatchCoordinator::run_until_empty`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub dispatched:  usize,
    pub unreachable: usize,
}

impl DispatchSummary {
    pub fn total(&self) -> usize {
        self.dispatched + self.unreachable
    }
}

// ── Coordinator ───────────────────────────────────────────────────────────────

/// Mutable dispatch state.  Only ever touched while holding the lock.
struct DispatchState {
    scheduler: IncidentScheduler,
    ledger:    DispatchLedger,
}

/// Owns the incident queue and the ledger, shares the city graph, and runs
/// dispatches one at a time.
///
/// All methods take `&self`; wrap the coordinator in an `Arc` to drive it
/// from several threads.  Scheduler and ledger are guarded by a single
/// mutex held for the whole dequeue → route → record sequence.
pub struct DispatchCoordinator<R: RouteFinder> {
    graph:  Arc<CityGraph>,
    finder: R,
    state:  Mutex<DispatchState>,
}

impl<R: RouteFinder> DispatchCoordinator<R> {
    /// A coordinator with an empty queue and an empty ledger.
    pub fn new(graph: Arc<CityGraph>, finder: R) -> Self {
        Self::with_parts(graph, finder, IncidentScheduler::new(), DispatchLedger::new())
    }

    /// A coordinator that takes over an existing queue and ledger.
    ///
    /// Incidents already in `scheduler` were not validated against `graph`;
    /// one with an unknown location surfaces as [`DispatchError::Routing`]
    /// when it is processed.
    pub fn with_parts(
        graph:     Arc<CityGraph>,
        finder:    R,
        scheduler: IncidentScheduler,
        ledger:    DispatchLedger,
    ) -> Self {
        Self { graph, finder, state: Mutex::new(DispatchState { scheduler, ledger }) }
    }

    /// Release the queue and the ledger.
    pub fn into_parts(self) -> (IncidentScheduler, DispatchLedger) {
        let state = self.state.into_inner().unwrap_or_else(PoisonError::into_inner);
        (state.scheduler, state.ledger)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Validate `incident` against the city graph and enqueue it.
    pub fn submit(&self, incident: Incident) -> DispatchResult<()> {
        if !self.graph.contains(incident.location) {
            return Err(DispatchError::UnknownLocation(incident.location));
        }
        self.lock().scheduler.enqueue(incident);
        Ok(())
    }

    /// Dispatch the most urgent pending incident.
    ///
    /// Fails with [`DispatchError::EmptyQueue`] if nothing is pending.  An
    /// unreachable facility is not an error: it comes back as
    /// [`DispatchOutcome::Unreachable`].  Any other search failure returns
    /// the dequeued incident inside [`DispatchError::Routing`].
    pub fn process_next(&self) -> DispatchResult<DispatchOutcome> {
        let mut state = self.lock();
        let incident = state.scheduler.dequeue_next()?;

        match self.finder.find_nearest_facility(&self.graph, incident.location, incident.kind) {
            Ok(route) => {
                let record = DispatchRecord::new(&incident, route);
                info!(
                    incident = %record.incident,
                    kind     = %record.kind,
                    facility = %record.facility,
                    cost     = record.cost,
                    "dispatched"
                );
                state.ledger.push(record.clone());
                Ok(DispatchOutcome::Dispatched(record))
            }
            Err(CityError::NoFacilityReachable { origin, kind }) => {
                warn!(incident = %incident.id, %origin, %kind, "no facility reachable");
                Ok(DispatchOutcome::Unreachable(incident))
            }
            Err(source) => {
                warn!(incident = %incident.id, error = %source, "routing failed");
                Err(DispatchError::Routing { incident: Box::new(incident), source })
            }
        }
    }

    /// Call [`process_next`](Self::process_next) until the queue is empty,
    /// reporting every outcome to `observer`.
    ///
    /// Any error other than `EmptyQueue` stops the loop and is returned;
    /// incidents still queued stay queued.
    pub fn run_until_empty<O: DispatchObserver>(&self, observer: &mut O) -> DispatchResult<DispatchSummary> {
        let mut summary = DispatchSummary::default();
        loop {
            match self.process_next() {
                Ok(DispatchOutcome::Dispatched(record)) => {
                    summary.dispatched += 1;
                    observer.on_dispatched(&record);
                }
                Ok(DispatchOutcome::Unreachable(incident)) => {
                    summary.unreachable += 1;
                    observer.on_unreachable(&incident);
                }
                Err(DispatchError::EmptyQueue) => break,
                Err(e) => return Err(e),
            }
        }
        debug!(dispatched = summary.dispatched, unreachable = summary.unreachable, "queue drained");
        observer.on_drained(&summary);
        Ok(summary)
    }

    // ── Read-only queries ─────────────────────────────────────────────────

    pub fn graph(&self) -> &Arc<CityGraph> {
        &self.graph
    }

    /// Number of incidents waiting.
    pub fn pending(&self) -> usize {
        self.lock().scheduler.len()
    }

    /// Clones of the pending incidents in dispatch order.
    pub fn pending_snapshot(&self) -> Vec<Incident> {
        self.lock().scheduler.iter_pending().cloned().collect()
    }

    pub fn ledger_len(&self) -> usize {
        self.lock().ledger.len()
    }

    /// Clones of every ledger record, most recent first.
    pub fn ledger_snapshot(&self) -> Vec<DispatchRecord> {
        self.lock().ledger.all().cloned().collect()
    }

    /// Run `f` against the ledger while holding the lock.
    pub fn with_ledger<T>(&self, f: impl FnOnce(&DispatchLedger) -> T) -> T {
        f(&self.lock().ledger)
    }

    // ── Ledger top ────────────────────────────────────────────────────────

    /// Remove and return the most recent record.
    pub fn pop_record(&self) -> DispatchResult<DispatchRecord> {
        self.lock().ledger.pop()
    }

    /// A clone of the most recent record.
    pub fn peek_record(&self) -> DispatchResult<DispatchRecord> {
        self.lock().ledger.peek().cloned()
    }

    // Mutations under the lock are single push/pop calls; a poisoned guard
    // still holds consistent state.
    fn lock(&self) -> MutexGuard<'_, DispatchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
