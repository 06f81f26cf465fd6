//! The `Incident` record and its arrival stamp.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use er_core::{EmergencyType, IncidentId, LocationId, Severity};

/// Process-wide source of arrival stamps.
static NEXT_ARRIVAL: AtomicU64 = AtomicU64::new(0);

/// Monotonic arrival order of an incident.  Only meaningful relative to other
/// stamps; it is not a wall-clock time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalStamp(pub u64);

impl ArrivalStamp {
    /// Draw the next stamp.  Strictly greater than every stamp previously
    /// drawn in this process, from any thread.
    #[inline]
    pub fn next() -> ArrivalStamp {
        ArrivalStamp(NEXT_ARRIVAL.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ArrivalStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One reported emergency waiting for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Incident {
    pub id:          IncidentId,
    /// Where the incident is.  Must exist in the city graph.
    pub location:    LocationId,
    /// Which facility type must respond.
    pub kind:        EmergencyType,
    pub severity:    Severity,
    /// Set by [`IncidentScheduler::enqueue`](crate::IncidentScheduler::enqueue)
    /// unless the producer already stamped it.
    pub arrival:     Option<ArrivalStamp>,
    /// Free text; never interpreted.
    pub description: String,
}

impl Incident {
    /// An unstamped incident.
    pub fn new(
        id:          IncidentId,
        location:    LocationId,
        kind:        EmergencyType,
        severity:    Severity,
        description: impl Into<String>,
    ) -> Self {
        Self { id, location, kind, severity, arrival: None, description: description.into() }
    }

    /// Builder-style override of the arrival stamp.
    pub fn with_arrival(mut self, arrival: ArrivalStamp) -> Self {
        self.arrival = Some(arrival);
        self
    }
}
