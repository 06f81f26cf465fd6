use er_city::CityError;
use er_core::LocationId;
use er_schedule::{Incident, ScheduleError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no incidents pending")]
    EmptyQueue,

    #[error("dispatch ledger is empty")]
    EmptyLedger,

    #[error("incident location {0} not found in city graph")]
    UnknownLocation(LocationId),

    /// The search failed for a dequeued incident.  The incident is no
    /// longer queued; it is handed back here.
    #[error("routing failed for incident {}: {source}", .incident.id)]
    Routing {
        incident: Box<Incident>,
        #[source]
        source:   CityError,
    },

    #[error("scheduler error: {0}")]
    Schedule(ScheduleError),
}

impl DispatchError {
    /// Recover the incident carried by a [`DispatchError::Routing`] error.
    pub fn into_incident(self) -> Option<Incident> {
        match self {
            DispatchError::Routing { incident, .. } => Some(*incident),
            _ => None,
        }
    }
}

impl From<ScheduleError> for DispatchError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::EmptyQueue => DispatchError::EmptyQueue,
            other => DispatchError::Schedule(other),
        }
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;
