//! Nearest-facility routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! `er-dispatch` calls routing through the [`RouteFinder`] trait, so an
//! application can swap in a different search (A*, pruned Dijkstra,
//! precomputed tables) without touching the coordinator.
//!
//! # Search
//!
//! The target is "nearest among a set", not a single node, so the default
//! search runs to completion from the origin and then picks the closest
//! candidate.  Candidates are scanned in ascending id order with a strict
//! `<` comparison, so equidistant facilities always resolve to the lowest id.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use er_core::{EmergencyType, LocationId};

use crate::graph::CityGraph;
use crate::{CityError, CityResult};

// ── FacilityRoute ─────────────────────────────────────────────────────────────

/// The result of a nearest-facility query.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityRoute {
    /// The chosen facility's location.
    pub facility: LocationId,
    /// Locations from origin to facility, both endpoints included.
    pub path: Vec<LocationId>,
    /// Sum of edge weights along `path`.
    pub cost: f64,
}

impl FacilityRoute {
    /// `true` if the origin is itself the facility.
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }
}

// ── RouteFinder trait ─────────────────────────────────────────────────────────

/// Pluggable nearest-facility search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the coordinator shares one finder
/// across every thread that processes incidents.
pub trait RouteFinder: Send + Sync {
    /// Find the closest facility of type `kind` reachable from `origin`.
    ///
    /// Fails with [`CityError::UnknownLocation`] before searching if `origin`
    /// is absent, and with [`CityError::NoFacilityReachable`] when no
    /// facility of that type is connected to `origin`.
    fn find_nearest_facility(
        &self,
        graph:  &CityGraph,
        origin: LocationId,
        kind:   EmergencyType,
    ) -> CityResult<FacilityRoute>;
}

// ── DijkstraRouteFinder ───────────────────────────────────────────────────────

/// Full single-source Dijkstra followed by a scan over the candidate set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouteFinder;

impl RouteFinder for DijkstraRouteFinder {
    fn find_nearest_facility(
        &self,
        graph:  &CityGraph,
        origin: LocationId,
        kind:   EmergencyType,
    ) -> CityResult<FacilityRoute> {
        let tree = ShortestPathTree::build(graph, origin)?;

        let mut best: Option<(LocationId, f64)> = None;
        for candidate in graph.facilities_of_type(kind) {
            let Some(d) = tree.distance_to(candidate) else { continue };
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((candidate, d));
            }
        }

        let (facility, cost) = best.ok_or(CityError::NoFacilityReachable { origin, kind })?;
        let path = tree
            .path_to(facility)
            .ok_or(CityError::NoFacilityReachable { origin, kind })?;

        debug!(%origin, %kind, %facility, cost, hops = path.len() - 1, "nearest facility");
        Ok(FacilityRoute { facility, path, cost })
    }
}

// ── Shortest-path tree ────────────────────────────────────────────────────────

/// Heap key: a non-negative cost with a total order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Distances and predecessors from one origin to every location, the output
/// of a complete Dijkstra run.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g> {
    graph:       &'g CityGraph,
    origin_slot: usize,
    /// dist[s] = best known cost to reach slot s; `INFINITY` if unreached.
    dist:        Vec<f64>,
    /// prev[s] = slot that reached s; `None` for the origin and unreached slots.
    prev:        Vec<Option<usize>>,
}

impl<'g> ShortestPathTree<'g> {
    /// Run Dijkstra from `origin` to exhaustion.
    pub fn build(graph: &'g CityGraph, origin: LocationId) -> CityResult<Self> {
        let origin_slot = graph.slot(origin).ok_or(CityError::UnknownLocation(origin))?;

        let n = graph.location_count();
        let mut dist    = vec![f64::INFINITY; n];
        let mut prev    = vec![None; n];
        let mut settled = vec![false; n];

        dist[origin_slot] = 0.0;

        // Reverse makes BinaryHeap (max) behave as min-heap.
        let mut heap: BinaryHeap<Reverse<(Cost, usize)>> = BinaryHeap::new();
        heap.push(Reverse((Cost(0.0), origin_slot)));

        while let Some(Reverse((Cost(cost), u))) = heap.pop() {
            // Skip stale heap entries.
            if settled[u] {
                continue;
            }
            settled[u] = true;

            for edge in graph.edges_at(u) {
                let v = edge.to_slot;
                let candidate = cost + edge.weight;
                if candidate < dist[v] {
                    dist[v] = candidate;
                    prev[v] = Some(u);
                    heap.push(Reverse((Cost(candidate), v)));
                }
            }
        }

        Ok(Self { graph, origin_slot, dist, prev })
    }

    pub fn origin(&self) -> LocationId {
        self.graph.id_at(self.origin_slot)
    }

    /// Shortest cost to `target`, or `None` if it is unreachable or unknown.
    pub fn distance_to(&self, target: LocationId) -> Option<f64> {
        let s = self.graph.slot(target)?;
        let d = self.dist[s];
        d.is_finite().then_some(d)
    }

    /// Origin-to-`target` path, both endpoints included.  `None` if `target`
    /// is unreachable or unknown.
    pub fn path_to(&self, target: LocationId) -> Option<Vec<LocationId>> {
        let target_slot = self.graph.slot(target)?;
        if !self.dist[target_slot].is_finite() {
            return None;
        }

        let mut path = vec![target];
        let mut cur = target_slot;
        while let Some(p) = self.prev[cur] {
            path.push(self.graph.id_at(p));
            cur = p;
        }
        debug_assert_eq!(cur, self.origin_slot);
        path.reverse();
        Some(path)
    }
}
