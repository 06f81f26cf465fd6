//! City-subsystem error type.

use thiserror::Error;

use er_core::{CoreError, EmergencyType, LocationId};

/// Errors produced by `er-city`.
#[derive(Debug, Error)]
pub enum CityError {
    #[error("location {0} already exists")]
    DuplicateLocation(LocationId),

    #[error("location {0} not found in city graph")]
    UnknownLocation(LocationId),

    #[error("invalid road {from} - {to}: distance {distance} and delay {delay} must be finite and non-negative")]
    InvalidWeight {
        from:     LocationId,
        to:       LocationId,
        distance: f64,
        delay:    f64,
    },

    /// Expected outcome when the origin's component holds no facility of the
    /// requested type.  Not a programming error.
    #[error("no {kind} facility reachable from {origin}")]
    NoFacilityReachable { origin: LocationId, kind: EmergencyType },

    #[error("city data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type CityResult<T> = Result<T, CityError>;
