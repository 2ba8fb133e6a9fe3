//! sydney — smallest end-to-end example for the rp route planner.
//!
//! Plans a run through the given waypoints on a bundled Overpass extract of
//! a few Earlwood streets (a 5 × 5 grid plus a gravel shortcut).  A real
//! deployment would send the printed Overpass query and feed the response to
//! the same decoder instead of the bundled file.
//!
//! ```text
//! RUST_LOG=debug cargo run -p sydney -- -33.9100,151.1060 -33.9000,151.1160
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rp_core::{Activity, GeoPoint, RoutingConfig};
use rp_graph::{GraphBuilder, RawElements};
use rp_region::{convex_hull, overpass_query};
use rp_route::{AStarPlanner, check_span, route_between};

const BUNDLED_EXTRACT: &str = include_str!("../data/earlwood.json");

#[derive(Parser, Debug)]
#[command(name = "sydney", about = "Plan a run through waypoints on a bundled street extract")]
struct Args {
    /// Waypoints as "lat,lon", in visiting order.
    #[arg(
        num_args = 2..,
        allow_hyphen_values = true,
        default_values = ["-33.9100,151.1060", "-33.9000,151.1160"]
    )]
    waypoints: Vec<GeoPoint>,

    /// Overpass JSON response to plan on instead of the bundled extract.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Largest accepted request span in metres.
    #[arg(long, default_value_t = rp_core::config::DEFAULT_MAX_SPAN_M)]
    max_span_m: f64,

    /// Preference profile: run, walk, or ride.
    #[arg(long, default_value = "run")]
    activity: Activity,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = RoutingConfig { max_span_m: args.max_span_m, activity: args.activity };
    config.validate()?;

    // ── Pre-flight and region ─────────────────────────────────────────────
    let span_m = check_span(&config, &args.waypoints)?;
    let region = convex_hull(&args.waypoints)?;
    info!(span_m, vertices = region.len(), "query region ready");
    println!("Overpass query:\n  {}\n", overpass_query(&region));

    // ── Map data → graph ──────────────────────────────────────────────────
    let raw = match &args.data {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            RawElements::from_overpass_reader(std::io::BufReader::new(file))?
        }
        None => RawElements::from_overpass_str(BUNDLED_EXTRACT)?,
    };
    let graph = GraphBuilder::from_elements(raw).activity(config.activity).build()?;
    info!(?graph, "graph built");

    // ── Plan ──────────────────────────────────────────────────────────────
    let started = Instant::now();
    let route = route_between(&AStarPlanner, &graph, &args.waypoints, &config)?;
    let elapsed = started.elapsed();

    println!("Planned {} points, {:.0} m in {:.3} ms", route.len(), route.distance, elapsed.as_secs_f64() * 1e3);
    println!("{}", serde_json::to_string_pretty(&route)?);
    Ok(())
}
