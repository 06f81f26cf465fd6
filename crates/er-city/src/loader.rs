//! CSV city loader.
//!
//! # CSV formats
//!
//! Three record streams, each with a header row:
//!
//! ```csv
//! id,name,lat,lon,category
//! 1,Central Hospital,30.695,-88.043,hospital
//! 2,Oak & 5th,30.701,-88.050,intersection
//! ```
//!
//! ```csv
//! source,target,distance,delay
//! 1,2,5.0,3.0
//! ```
//!
//! ```csv
//! location_id,kind,name,capacity
//! 1,medical,Central Hospital,high
//! ```
//!
//! `kind` is `medical` or `fire`; `capacity` is `high`, `medium` or `low`.
//!
//! Rows go through the same [`CityGraph`] operations a caller would use, in
//! file order, so a bad row is reported with the same error the direct call
//! would produce.  Nothing is silently dropped: the first failing row aborts
//! the load.

use std::fs::File;
use std::io::Read;

use serde::Deserialize;
use tracing::info;

use er_core::{Capacity, CityDataConfig, EmergencyType, GeoPoint, LocationId};

use crate::graph::{CityGraph, Location};
use crate::CityError;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    id:       u32,
    name:     String,
    lat:      f64,
    lon:      f64,
    category: String,
}

#[derive(Deserialize)]
struct RoadRecord {
    source:   u32,
    target:   u32,
    distance: f64,
    delay:    f64,
}

#[derive(Deserialize)]
struct FacilityRecord {
    location_id: u32,
    kind:        String,
    name:        String,
    capacity:    String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`CityGraph`] from the three CSV files named in `config`.
pub fn load_city_csv(config: &CityDataConfig) -> Result<CityGraph, CityError> {
    let locations  = File::open(&config.locations)?;
    let roads      = File::open(&config.roads)?;
    let facilities = File::open(&config.facilities)?;
    load_city_reader(locations, roads, facilities)
}

/// Like [`load_city_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for data embedded in a
/// binary.
pub fn load_city_reader<L: Read, R: Read, F: Read>(
    locations:  L,
    roads:      R,
    facilities: F,
) -> Result<CityGraph, CityError> {
    let mut graph = CityGraph::new();

    for row in csv::Reader::from_reader(locations).deserialize::<LocationRecord>() {
        let row = row.map_err(|e| CityError::Parse(format!("locations: {e}")))?;
        graph.add_location(Location::new(
            LocationId(row.id),
            row.name,
            GeoPoint::new(row.lat, row.lon),
            row.category,
        ))?;
    }

    for row in csv::Reader::from_reader(roads).deserialize::<RoadRecord>() {
        let row = row.map_err(|e| CityError::Parse(format!("roads: {e}")))?;
        graph.add_road(LocationId(row.source), LocationId(row.target), row.distance, row.delay)?;
    }

    for row in csv::Reader::from_reader(facilities).deserialize::<FacilityRecord>() {
        let row = row.map_err(|e| CityError::Parse(format!("facilities: {e}")))?;
        let kind: EmergencyType = row.kind.parse()?;
        let capacity: Capacity  = row.capacity.parse()?;
        graph.add_facility(LocationId(row.location_id), kind, row.name, capacity)?;
    }

    info!(
        locations  = graph.location_count(),
        roads      = graph.road_count(),
        facilities = graph.facilities().len(),
        "city graph loaded"
    );
    Ok(graph)
}
