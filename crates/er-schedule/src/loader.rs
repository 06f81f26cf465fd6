//! CSV incident-feed loader.
//!
//! # CSV format
//!
//! ```csv
//! id,location_id,kind,severity,description
//! 1,12,medical,high,cardiac arrest
//! 2,7,fire,low,smoke reported
//! ```
//!
//! `severity` accepts `high`/`medium`/`low` or the rank `1`/`2`/`3`.  Any
//! other value fails the load; nothing is defaulted.
//!
//! Incidents are returned in file order without arrival stamps.  Enqueue
//! them in that order to preserve the feed's FIFO order within a severity.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use er_core::{IncidentId, LocationId};

use crate::{Incident, ScheduleError};

#[derive(Deserialize)]
struct IncidentRecord {
    id:          u32,
    location_id: u32,
    kind:        String,
    severity:    String,
    #[serde(default)]
    description: String,
}

/// Load incidents from a CSV file.
pub fn load_incidents_csv(path: &Path) -> Result<Vec<Incident>, ScheduleError> {
    let file = File::open(path)?;
    load_incidents_reader(file)
}

/// Like [`load_incidents_csv`] but accepts any `Read` source.
pub fn load_incidents_reader<R: Read>(reader: R) -> Result<Vec<Incident>, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut incidents = Vec::new();

    for result in csv_reader.deserialize::<IncidentRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        incidents.push(Incident::new(
            IncidentId(row.id),
            LocationId(row.location_id),
            row.kind.parse()?,
            row.severity.parse()?,
            row.description,
        ));
    }

    info!(count = incidents.len(), "incident feed loaded");
    Ok(incidents)
}
