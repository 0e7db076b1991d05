use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fuelroute_cli::stations::load_catalog;
use fuelroute_lib::{
    build_corridor, plan_trip, polyline, RoutingResult, StateCode, TripRequest, TripSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fuel-route planning utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan fuel stops for a routing result against a station catalog.
    Plan {
        /// Routing-result JSON file (distance, duration, encoded polyline).
        #[arg(long = "route")]
        route_file: PathBuf,
        /// Station price CSV file.
        #[arg(long = "stations")]
        stations_file: PathBuf,
        /// Start state, as a code or full name.
        #[arg(long = "from")]
        from: String,
        /// End state, as a code or full name.
        #[arg(long = "to")]
        to: String,
        /// Override the vehicle's maximum range in miles.
        #[arg(long)]
        max_range: Option<f64>,
        /// Override the vehicle's fuel efficiency in miles per gallon.
        #[arg(long)]
        mpg: Option<Decimal>,
        /// Override the tank capacity in gallons.
        #[arg(long)]
        tank: Option<Decimal>,
        /// Geometry simplification tolerance in degrees.
        #[arg(long)]
        tolerance: Option<f64>,
        /// Emit the full summary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the state corridor between two states.
    Corridor {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to")]
        to: String,
    },
    /// Decode an encoded polyline to lon,lat pairs.
    Decode {
        /// The encoded polyline string.
        polyline: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Plan {
            route_file,
            stations_file,
            from,
            to,
            max_range,
            mpg,
            tank,
            tolerance,
            json,
        } => handle_plan(
            &route_file,
            &stations_file,
            &from,
            &to,
            max_range,
            mpg,
            tank,
            tolerance,
            json,
        ),
        Command::Corridor { from, to } => handle_corridor(&from, &to),
        Command::Decode { polyline } => handle_decode(&polyline),
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_plan(
    route_file: &Path,
    stations_file: &Path,
    from: &str,
    to: &str,
    max_range: Option<f64>,
    mpg: Option<Decimal>,
    tank: Option<Decimal>,
    tolerance: Option<f64>,
    json: bool,
) -> Result<()> {
    let start_state = parse_state(from)?;
    let end_state = parse_state(to)?;

    let file = File::open(route_file)
        .with_context(|| format!("failed to open route file {}", route_file.display()))?;
    let routing: RoutingResult = serde_json::from_reader(file)
        .with_context(|| format!("failed to parse routing result {}", route_file.display()))?;

    let catalog = load_catalog(stations_file)?;

    let mut request = TripRequest::new(routing, start_state, end_state);
    if let Some(range) = max_range {
        request.profile.max_range_miles = range;
    }
    if let Some(mpg) = mpg {
        request.profile.mpg = mpg;
    }
    if let Some(tank) = tank {
        request.profile.tank_capacity_gallons = tank;
    }
    if let Some(tolerance) = tolerance {
        request.tolerance = tolerance;
    }

    let plan = plan_trip(&request, &catalog).context("route planning failed")?;
    let summary = TripSummary::from_plan(&plan)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_plain());
    }
    Ok(())
}

fn handle_corridor(from: &str, to: &str) -> Result<()> {
    let start = parse_state(from)?;
    let end = parse_state(to)?;
    let corridor = build_corridor(start, end, &Default::default())?;

    println!("{}", corridor.joined_codes());
    println!(
        "{}",
        corridor
            .states()
            .iter()
            .map(|state| state.full_name())
            .collect::<Vec<_>>()
            .join(" > ")
    );
    Ok(())
}

fn handle_decode(encoded: &str) -> Result<()> {
    let points = polyline::decode(encoded).context("failed to decode polyline")?;
    for point in points {
        println!("{},{}", point.lon, point.lat);
    }
    Ok(())
}

fn parse_state(value: &str) -> Result<StateCode> {
    value
        .parse::<StateCode>()
        .with_context(|| format!("'{value}' is not a contiguous US state"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
