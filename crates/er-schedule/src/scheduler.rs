//! `IncidentScheduler` — severity-then-arrival priority queue.
//!
//! Backed by a `BTreeMap` keyed on `(rank, arrival, seq)`, which gives
//! O(log n) insert and O(log n) pop of the minimum, plus in-order iteration
//! for reporting without draining the queue.
//!
//! `seq` is a per-queue insertion counter.  Stamps drawn from
//! [`ArrivalStamp::next`] are already unique, so `seq` only matters when a
//! producer pre-stamps two incidents with the same value; it keeps the key
//! unique and the order total in that case too.

use std::collections::BTreeMap;

use tracing::trace;

use crate::{ArrivalStamp, Incident, ScheduleError, ScheduleResult};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct QueueKey {
    rank:    u8,
    arrival: ArrivalStamp,
    seq:     u64,
}

/// Pending incidents ordered by severity, then arrival.
#[derive(Default, Debug)]
pub struct IncidentScheduler {
    inner:    BTreeMap<QueueKey, Incident>,
    next_seq: u64,
}

impl IncidentScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an incident.  Stamps it with [`ArrivalStamp::next`] if it carries
    /// no arrival stamp yet.
    pub fn enqueue(&mut self, mut incident: Incident) {
        let arrival = *incident.arrival.get_or_insert_with(ArrivalStamp::next);
        let key = QueueKey { rank: incident.severity.rank(), arrival, seq: self.next_seq };
        self.next_seq += 1;
        trace!(incident = %incident.id, severity = %incident.severity, %arrival, "enqueued");
        self.inner.insert(key, incident);
    }

    /// Remove and return the most urgent incident.
    pub fn dequeue_next(&mut self) -> ScheduleResult<Incident> {
        self.inner
            .pop_first()
            .map(|(_, incident)| incident)
            .ok_or(ScheduleError::EmptyQueue)
    }

    /// The incident [`dequeue_next`](Self::dequeue_next) would return.
    pub fn peek_next(&self) -> Option<&Incident> {
        self.inner.first_key_value().map(|(_, incident)| incident)
    }

    /// Pending incidents in dispatch order.  Does not modify the queue.
    pub fn iter_pending(&self) -> impl Iterator<Item = &Incident> + '_ {
        self.inner.values()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
