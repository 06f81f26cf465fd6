//! city — smallest end-to-end run of the emergency dispatch engine.
//!
//! With no arguments, dispatches six incidents across an embedded
//! six-location city (see `network.rs`).  Pass the path of a JSON
//! `CityDataConfig` to run against CSV files on disk instead:
//!
//! ```text
//! cargo run -p city -- data/mobile.json
//! RUST_LOG=debug cargo run -p city
//! ```

mod network;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use er_city::{CityGraph, DijkstraRouteFinder, load_city_csv, minimum_spanning_forest, reachable_from};
use er_core::CityDataConfig;
use er_dispatch::{DispatchCoordinator, DispatchError};
use er_output::{CsvWriter, LedgerOutputObserver};
use er_schedule::{Incident, load_incidents_csv};

const DEFAULT_OUTPUT_DIR: &str = "output/city";

// ── Input ─────────────────────────────────────────────────────────────────────

/// City graph, incident feed, and output directory for one run.
struct RunInput {
    graph:      CityGraph,
    incidents:  Vec<Incident>,
    output_dir: PathBuf,
}

fn load_input(config_path: Option<String>) -> Result<RunInput> {
    let Some(path) = config_path else {
        info!("no config given; using embedded city");
        return Ok(RunInput {
            graph:      network::build_city()?,
            incidents:  network::incident_feed()?,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        });
    };

    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config: CityDataConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;

    let graph = load_city_csv(&config).context("loading city")?;
    let incidents = match &config.incidents {
        Some(p) => load_incidents_csv(p).with_context(|| format!("loading {}", p.display()))?,
        None => Vec::new(),
    };
    Ok(RunInput { graph, incidents, output_dir: config.output_dir })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 1. Load city and incidents.
    let input = load_input(std::env::args().nth(1))?;
    info!(
        locations  = input.graph.location_count(),
        roads      = input.graph.road_count(),
        facilities = input.graph.facilities().len(),
        incidents  = input.incidents.len(),
        "city loaded"
    );

    // 2. Planning reports.
    let mst = minimum_spanning_forest(&input.graph);
    info!(
        roads        = mst.edges.len(),
        total_weight = mst.total_weight,
        components   = mst.component_count,
        "minimum spanning forest"
    );
    if let Some(first) = input.graph.locations().first() {
        let reach = reachable_from(&input.graph, first.id)?;
        info!(origin = %reach.origin, reached = reach.visited.len(), "reachability");
        for id in &reach.unreachable {
            warn!(location = %id, "not reachable from {}", reach.origin);
        }
    }

    // 3. Queue incidents.
    let coordinator = DispatchCoordinator::new(Arc::new(input.graph), DijkstraRouteFinder);
    for incident in input.incidents {
        match coordinator.submit(incident) {
            Ok(()) => {}
            Err(DispatchError::UnknownLocation(loc)) => warn!(location = %loc, "incident skipped"),
            Err(e) => return Err(e.into()),
        }
    }
    info!(pending = coordinator.pending(), "incidents queued");

    // 4. Drain.
    let writer = CsvWriter::new(&input.output_dir)
        .with_context(|| format!("opening output in {}", input.output_dir.display()))?;
    let mut obs = LedgerOutputObserver::new(writer);

    let t0 = Instant::now();
    let summary = coordinator.run_until_empty(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        error!("output error: {e}");
    }
    info!(
        dispatched  = summary.dispatched,
        unreachable = summary.unreachable,
        rows        = obs.rows_written(),
        elapsed_ms  = elapsed.as_secs_f64() * 1_000.0,
        output      = %input.output_dir.display(),
        "queue drained"
    );

    // 5. The ledger is LIFO: the last dispatch comes off first.
    match coordinator.pop_record() {
        Ok(last) => info!(
            incident = %last.incident,
            facility = %last.facility,
            hops     = last.hops(),
            cost     = last.cost,
            remaining = coordinator.ledger_len(),
            "most recent dispatch"
        ),
        Err(DispatchError::EmptyLedger) => info!("ledger is empty"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
