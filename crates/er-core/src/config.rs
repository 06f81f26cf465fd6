//! Input/output locations for a dispatch run.
//!
//! The engine itself owns no file format; this struct only tells the CSV
//! loaders in `er-city` and `er-schedule` where their record streams live
//! and tells `er-output` where to write.  Typically loaded from JSON by the
//! application crate (feature `serde`) or built with [`CityDataConfig::from_dir`].

use std::path::{Path, PathBuf};

/// File locations for one city dataset and its output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityDataConfig {
    /// `id,name,lat,lon,category`
    pub locations: PathBuf,

    /// `source,target,distance,delay`
    pub roads: PathBuf,

    /// `location_id,kind,name,capacity`
    pub facilities: PathBuf,

    /// `id,location_id,kind,severity,description`.  `None` when incidents
    /// arrive from a live feed rather than a file.
    #[cfg_attr(feature = "serde", serde(default))]
    pub incidents: Option<PathBuf>,

    /// Directory that receives `dispatches.csv` and `failures.csv`.
    pub output_dir: PathBuf,
}

impl CityDataConfig {
    pub const LOCATIONS_FILE:  &'static str = "locations.csv";
    pub const ROADS_FILE:      &'static str = "roads.csv";
    pub const FACILITIES_FILE: &'static str = "facilities.csv";
    pub const INCIDENTS_FILE:  &'static str = "incidents.csv";

    /// Conventional layout: all four CSVs inside `dir`, output in `dir/output`.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            locations:  dir.join(Self::LOCATIONS_FILE),
            roads:      dir.join(Self::ROADS_FILE),
            facilities: dir.join(Self::FACILITIES_FILE),
            incidents:  Some(dir.join(Self::INCIDENTS_FILE)),
            output_dir: dir.join("output"),
        }
    }
}
