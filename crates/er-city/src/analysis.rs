//! Whole-graph planning analyses.
//!
//! These are one-shot reports over a finished [`CityGraph`]; the dispatch
//! path never calls them.  Both are deterministic for a given graph, so
//! reports can be diffed between runs.

use std::collections::BTreeSet;

use petgraph::unionfind::UnionFind;

use er_core::LocationId;

use crate::graph::CityGraph;
use crate::{CityError, CityResult};

// ── Minimum spanning forest ───────────────────────────────────────────────────

/// One road kept in the spanning forest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanningEdge {
    pub from:   LocationId,
    pub to:     LocationId,
    pub weight: f64,
}

/// Output of [`minimum_spanning_forest`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningReport {
    /// Chosen roads in ascending weight order.
    pub edges:           Vec<SpanningEdge>,
    pub total_weight:    f64,
    /// Number of trees in the forest; 1 for a connected city, 0 for an
    /// empty graph.
    pub component_count: usize,
}

impl SpanningReport {
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Kruskal's algorithm over the undirected road set.
///
/// Roads are considered in `(weight, min id, max id)` order so equal-weight
/// ties resolve the same way every run.  A disconnected city yields one tree
/// per component.
pub fn minimum_spanning_forest(graph: &CityGraph) -> SpanningReport {
    let mut candidates: Vec<(f64, LocationId, LocationId, usize, usize)> = graph
        .roads()
        .iter()
        .filter_map(|r| {
            let (a, b) = if r.from <= r.to { (r.from, r.to) } else { (r.to, r.from) };
            Some((r.weight, a, b, graph.slot(a)?, graph.slot(b)?))
        })
        .collect();
    candidates.sort_by(|x, y| {
        x.0.total_cmp(&y.0).then(x.1.cmp(&y.1)).then(x.2.cmp(&y.2))
    });

    let n = graph.location_count();
    let mut sets: UnionFind<usize> = UnionFind::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;

    for (weight, from, to, sa, sb) in candidates {
        if sets.union(sa, sb) {
            edges.push(SpanningEdge { from, to, weight });
            total_weight += weight;
        }
    }

    SpanningReport { component_count: n - edges.len(), edges, total_weight }
}

// ── Reachability ──────────────────────────────────────────────────────────────

/// Output of [`reachable_from`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityReport {
    pub origin:      LocationId,
    /// Reached locations in depth-first visitation order, origin first.
    pub visited:     Vec<LocationId>,
    /// Locations with no road path from the origin, ascending.
    pub unreachable: Vec<LocationId>,
}

impl ReachabilityReport {
    /// `true` if every location can be reached from the origin.
    pub fn is_connected(&self) -> bool {
        self.unreachable.is_empty()
    }
}

/// Iterative depth-first search from `origin`.
///
/// Neighbors are explored in ascending id order, which fixes the visitation
/// order independent of road insertion order.
pub fn reachable_from(graph: &CityGraph, origin: LocationId) -> CityResult<ReachabilityReport> {
    let start = graph.slot(origin).ok_or(CityError::UnknownLocation(origin))?;

    let mut seen = vec![false; graph.location_count()];
    let mut visited = Vec::new();
    let mut stack = vec![start];

    while let Some(u) = stack.pop() {
        if seen[u] {
            continue;
        }
        seen[u] = true;
        visited.push(graph.id_at(u));

        // Push in descending order so the smallest id is popped first.
        let next: BTreeSet<(LocationId, usize)> = graph
            .edges_at(u)
            .iter()
            .filter(|e| !seen[e.to_slot])
            .map(|e| (e.to, e.to_slot))
            .collect();
        stack.extend(next.into_iter().rev().map(|(_, s)| s));
    }

    let mut unreachable: Vec<LocationId> = graph
        .locations()
        .iter()
        .enumerate()
        .filter(|&(s, _)| !seen[s])
        .map(|(_, l)| l.id)
        .collect();
    unreachable.sort_unstable();

    Ok(ReachabilityReport { origin, visited, unreachable })
}
