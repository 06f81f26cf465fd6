//! `er-city` — city road graph, nearest-facility routing, and graph analyses.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`graph`]    | `CityGraph`, `Location`, `Facility`, `Road`, `Edge`         |
//! | [`router`]   | `RouteFinder` trait, `FacilityRoute`, `DijkstraRouteFinder` |
//! | [`loader`]   | `load_city_csv`, `load_city_reader`                         |
//! | [`analysis`] | `minimum_spanning_forest`, `reachable_from`                 |
//! | [`error`]    | `CityError`, `CityResult<T>`                                |
//!
//! # Lifecycle
//!
//! A `CityGraph` is built once (directly or through the loader) and then
//! shared read-only, typically behind an `Arc`, for the lifetime of the
//! process.  Nothing in the dispatch path mutates it.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Propagates serde derives to `er-core` types.                 |

pub mod analysis;
pub mod error;
pub mod graph;
pub mod loader;
pub mod router;


pub use analysis::{minimum_spanning_forest, reachable_from, ReachabilityReport, SpanningEdge, SpanningReport};
pub use error::{CityError, CityResult};
pub use graph::{edge_weight, CityGraph, Edge, Facility, Location, Road, TRAFFIC_DELAY_DIVISOR};
pub use loader::{load_city_csv, load_city_reader};
pub use router::{DijkstraRouteFinder, FacilityRoute, RouteFinder, ShortestPathTree};
