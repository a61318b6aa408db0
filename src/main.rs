#![forbid(unsafe_code)]

use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use route_proximity::config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_THRESHOLD_KM};
use route_proximity::graph::{plan_trip, ProgressObserver};
use route_proximity::io::{load_routes, save_graph};
use route_proximity::models::Point;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "route-proximity: build a proximity graph over named routes",
    long_about = None
)]
struct Cli {
    /// Route document to read.
    #[arg(short, long, global = true, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Graph document to write.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Connect routes closer than this many kilometers.
    #[arg(short, long, global = true, default_value_t = DEFAULT_THRESHOLD_KM)]
    threshold_km: f64,

    /// Build adjacency lists in parallel.
    #[arg(long, global = true)]
    parallel: bool,

    /// Abort the build after this many seconds.
    #[arg(long, global = true)]
    deadline_secs: Option<u64>,

    /// Suppress per-route progress lines.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the fewest-transfer route sequence between two points.
    Plan {
        /// Origin as LAT,LON.
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,

        /// Destination as LAT,LON.
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            output: self.output.clone(),
            threshold_km: self.threshold_km,
            parallel: self.parallel,
            deadline: self.deadline_secs.map(Duration::from_secs),
            quiet: self.quiet,
        }
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got {s:?}"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude: {e}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("bad longitude: {e}"))?;
    if !lat.is_finite() || !lon.is_finite() {
        return Err(format!("coordinates must be finite, got {s:?}"));
    }
    Ok(Point::new(lat, lon))
}

/// Prints one line per processed route to stdout.
struct ConsoleProgress {
    quiet: bool,
}

impl ProgressObserver for ConsoleProgress {
    fn route_processed(&self, _index: usize, _total: usize, route: &str) {
        if !self.quiet {
            println!("Processed route: {route}");
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ROUTE_PROXIMITY_LOG")
        .unwrap_or_else(|_| EnvFilter::new("route_proximity=info,warn"));

    let format =
        env::var("ROUTE_PROXIMITY_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run_build(config: &Config) -> anyhow::Result<()> {
    let started = Instant::now();
    let routes = load_routes(&config.input)?;
    let graph = config
        .graph_builder(started)
        .build(&routes, &ConsoleProgress { quiet: config.quiet })
        .context("building proximity graph")?;
    save_graph(&config.output, &graph)?;
    println!("Graph saved to {}", config.output.display());
    Ok(())
}

fn run_plan(config: &Config, from: Point, to: Point) -> anyhow::Result<()> {
    let started = Instant::now();
    let routes = load_routes(&config.input)?;
    let graph = config
        .graph_builder(started)
        .build(&routes, &())
        .context("building proximity graph")?;
    info!(edges = graph.edge_count(), "planning trip");

    match plan_trip(from, to, &routes, &graph) {
        Some(trip) => {
            for (i, window) in trip.windows(2).enumerate() {
                let d = graph.edge(&window[0], &window[1]).unwrap_or(f64::NAN);
                println!("{}. {} -> {} ({d:.3} km transfer)", i + 1, window[0], window[1]);
            }
            println!("Trip: {}", trip.join(" -> "));
        }
        None => println!("No connection between the given points"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    match cli.command {
        None => run_build(&config),
        Some(Commands::Plan { from, to }) => run_plan(&config, from, to),
    }
}
