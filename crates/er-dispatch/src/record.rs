//! The immutable result of one successful dispatch.

use er_city::FacilityRoute;
use er_core::{EmergencyType, IncidentId, LocationId};
use er_schedule::Incident;

/// One incident matched to one facility.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRecord {
    pub incident: IncidentId,
    /// Where the incident happened (first element of `path`).
    pub location: LocationId,
    pub kind:     EmergencyType,
    /// The responding facility (last element of `path`).
    pub facility: LocationId,
    /// Incident location to facility, both endpoints included.
    pub path:     Vec<LocationId>,
    /// Sum of edge weights along `path`.
    pub cost:     f64,
}

impl DispatchRecord {
    pub fn new(incident: &Incident, route: FacilityRoute) -> Self {
        Self {
            incident: incident.id,
            location: incident.location,
            kind:     incident.kind,
            facility: route.facility,
            path:     route.path,
            cost:     route.cost,
        }
    }

    /// Number of roads travelled.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
