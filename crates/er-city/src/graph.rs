//! City road graph.
//!
//! # Data layout
//!
//! Locations are stored densely in insertion order.  A `LocationId → slot`
//! map translates the caller's stable identifiers into `Vec` indices, so the
//! search in [`router`](crate::router) runs over flat `Vec<f64>` distance and
//! predecessor arrays:
//!
//! ```text
//! slots[id] = s      locations[s]   adjacency[s] = [Edge { to, weight }, ..]
//! ```
//!
//! Roads are undirected: [`CityGraph::add_road`] writes one [`Edge`] into each
//! endpoint's adjacency list with the same weight.  The original [`Road`]
//! records are kept as well for whole-graph analyses.
//!
//! Facilities are indexed per [`EmergencyType`] in a `BTreeSet`, so candidate
//! enumeration is a single map lookup and iterates in ascending id order.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use tracing::debug;

use er_core::{Capacity, EmergencyType, GeoPoint, LocationId};

use crate::{CityError, CityResult};

/// Traffic delay is scaled down by this divisor before being added to the
/// road's base distance.
pub const TRAFFIC_DELAY_DIVISOR: f64 = 3.0;

/// Edge weight used for routing: `distance + delay / 3`.
#[inline]
pub fn edge_weight(distance: f64, delay: f64) -> f64 {
    distance + delay / TRAFFIC_DELAY_DIVISOR
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// A named place in the city.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id:       LocationId,
    pub name:     String,
    pub pos:      GeoPoint,
    pub category: String,
}

impl Location {
    pub fn new(
        id:       LocationId,
        name:     impl Into<String>,
        pos:      GeoPoint,
        category: impl Into<String>,
    ) -> Self {
        Self { id, name: name.into(), pos, category: category.into() }
    }
}

/// A location that provides an emergency service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facility {
    pub location: LocationId,
    pub kind:     EmergencyType,
    pub name:     String,
    pub capacity: Capacity,
}

/// An undirected road segment as it was supplied to the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Road {
    pub from:     LocationId,
    pub to:       LocationId,
    pub distance: f64,
    pub delay:    f64,
    /// `edge_weight(distance, delay)`, computed once at insertion.
    pub weight:   f64,
}

/// One adjacency entry: the neighbor and the weight of the road leading to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to:     LocationId,
    pub weight: f64,
    /// Dense index of `to`, so the search never goes back through the id map.
    pub(crate) to_slot: usize,
}

// ── CityGraph ─────────────────────────────────────────────────────────────────

/// Weighted undirected road graph plus facility metadata.
///
/// Construct with [`CityGraph::new`] and the `add_*` methods (or via
/// [`load_city_reader`](crate::load_city_reader)), then share it read-only.
#[derive(Debug, Default, Clone)]
pub struct CityGraph {
    slots:          FxHashMap<LocationId, usize>,
    locations:      Vec<Location>,
    adjacency:      Vec<Vec<Edge>>,
    roads:          Vec<Road>,
    facilities:     Vec<Facility>,
    facility_index: FxHashMap<EmergencyType, BTreeSet<LocationId>>,
}

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of locations and roads.
    pub fn with_capacity(locations: usize, roads: usize) -> Self {
        let mut slots = FxHashMap::default();
        slots.reserve(locations);
        Self {
            slots,
            locations: Vec::with_capacity(locations),
            adjacency: Vec::with_capacity(locations),
            roads:     Vec::with_capacity(roads),
            ..Self::default()
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Register a location.  Fails with [`CityError::DuplicateLocation`] if
    /// its id is already present.
    pub fn add_location(&mut self, location: Location) -> CityResult<()> {
        if self.slots.contains_key(&location.id) {
            return Err(CityError::DuplicateLocation(location.id));
        }
        let slot = self.locations.len();
        self.slots.insert(location.id, slot);
        self.locations.push(location);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Add an undirected road between two existing locations.
    ///
    /// Both endpoints are checked before anything is written, so a rejected
    /// road leaves the graph untouched.  Weights must be finite and
    /// non-negative, and so must their combined weight; NaN is rejected along
    /// with negative values.
    pub fn add_road(
        &mut self,
        from:     LocationId,
        to:       LocationId,
        distance: f64,
        delay:    f64,
    ) -> CityResult<()> {
        let from_slot = self.slot(from).ok_or(CityError::UnknownLocation(from))?;
        let to_slot   = self.slot(to).ok_or(CityError::UnknownLocation(to))?;

        // Finite inputs can still overflow to an infinite weight.
        let valid = |x: f64| x.is_finite() && x >= 0.0;
        let weight = edge_weight(distance, delay);
        if !valid(distance) || !valid(delay) || !weight.is_finite() {
            return Err(CityError::InvalidWeight { from, to, distance, delay });
        }

        self.adjacency[from_slot].push(Edge { to, weight, to_slot });
        self.adjacency[to_slot].push(Edge { to: from, weight, to_slot: from_slot });
        self.roads.push(Road { from, to, distance, delay, weight });
        Ok(())
    }

    /// Mark an existing location as a facility of type `kind`.
    ///
    /// Registering the same location twice for the same type keeps a single
    /// entry in the candidate index.
    pub fn add_facility(
        &mut self,
        location: LocationId,
        kind:     EmergencyType,
        name:     impl Into<String>,
        capacity: Capacity,
    ) -> CityResult<()> {
        if !self.contains(location) {
            return Err(CityError::UnknownLocation(location));
        }
        let newly_indexed = self.facility_index.entry(kind).or_default().insert(location);
        if newly_indexed {
            self.facilities.push(Facility { location, kind, name: name.into(), capacity });
        } else {
            debug!(%location, %kind, "facility already registered; ignoring duplicate");
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Facility location ids of type `kind` in ascending id order.  Empty
    /// when none are registered.
    pub fn facilities_of_type(&self, kind: EmergencyType) -> impl Iterator<Item = LocationId> + '_ {
        self.facility_index.get(&kind).into_iter().flatten().copied()
    }

    /// Roads leaving `id` as `(neighbor, weight)` entries.  Empty for an
    /// isolated location.
    pub fn neighbors(&self, id: LocationId) -> CityResult<&[Edge]> {
        self.slot(id)
            .map(|s| self.adjacency[s].as_slice())
            .ok_or(CityError::UnknownLocation(id))
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.slot(id).map(|s| &self.locations[s])
    }

    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        self.slots.contains_key(&id)
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All roads in insertion order.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// All facility records in registration order.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// The facility record for `id` offering `kind`, if any.
    pub fn facility(&self, id: LocationId, kind: EmergencyType) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.location == id && f.kind == kind)
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    // ── Dense-slot access for the search and analyses ─────────────────────

    #[inline]
    pub(crate) fn slot(&self, id: LocationId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    #[inline]
    pub(crate) fn id_at(&self, slot: usize) -> LocationId {
        self.locations[slot].id
    }

    #[inline]
    pub(crate) fn edges_at(&self, slot: usize) -> &[Edge] {
        &self.adjacency[slot]
    }
}
