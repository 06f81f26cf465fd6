//! `er-core` — foundational types for the emergency-dispatch engine.
//!
//! This crate is a dependency of every other `er-*` crate.  It has no
//! `er-*` dependencies and only `thiserror` (plus optional `serde`) from the
//! outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`, `IncidentId`                            |
//! | [`geo`]         | `GeoPoint`                                            |
//! | [`emergency`]   | `EmergencyType`, `Severity`, `Capacity`               |
//! | [`config`]      | `CityDataConfig`                                      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod emergency;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CityDataConfig;
pub use emergency::{Capacity, EmergencyType, Severity};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{IncidentId, LocationId};
