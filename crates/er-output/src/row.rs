//! Plain data row types written by output backends.

use er_dispatch::DispatchRecord;
use er_schedule::Incident;

/// Joins location ids in the `path` column.
pub const PATH_SEPARATOR: &str = ">";

/// One successful dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRow {
    pub incident_id: u32,
    pub location_id: u32,
    pub kind:        &'static str,
    pub facility_id: u32,
    /// Location ids joined with [`PATH_SEPARATOR`], e.g. `"1>2>5"`.
    pub path:        String,
    pub cost:        f64,
}

impl From<&DispatchRecord> for DispatchRow {
    fn from(r: &DispatchRecord) -> Self {
        let path = r
            .path
            .iter()
            .map(|id| id.0.to_string())
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR);
        Self {
            incident_id: r.incident.0,
            location_id: r.location.0,
            kind:        r.kind.as_str(),
            facility_id: r.facility.0,
            path,
            cost:        r.cost,
        }
    }
}

/// One incident that could not be matched to a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureRow {
    pub incident_id: u32,
    pub location_id: u32,
    pub kind:        &'static str,
    pub severity:    &'static str,
}

impl From<&Incident> for FailureRow {
    fn from(i: &Incident) -> Self {
        Self {
            incident_id: i.id.0,
            location_id: i.location.0,
            kind:        i.kind.as_str(),
            severity:    i.severity.as_str(),
        }
    }
}
