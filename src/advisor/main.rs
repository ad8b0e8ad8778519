//! Terminal safety advisor.
//!
//! Waits for the backend, runs a simulation, and answers "am I safe and
//! where is my nearest shelter" for a coordinate. With `--watch`, keeps
//! polling live resources and the flood snapshot until Ctrl-C.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use deodar::api::{wait_until_online, ApiClient, ApiError};
use deodar::config::Config;
use deodar::districts::district_index;
use deodar::models::{Coordinate, Severity, SimulationOutcome};
use deodar::poll::spawn_polling;
use deodar::risk::RiskBand;
use deodar::spatial::directions_url;

#[derive(Parser, Debug)]
#[command(name = "advisor")]
#[command(about = "Disaster safety advisor for a coordinate")]
struct Args {
    /// Latitude of the position to assess
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude of the position to assess
    #[arg(long, allow_hyphen_values = true)]
    lng: f64,

    /// Disaster scenario: flood or earthquake
    #[arg(long, default_value = "flood")]
    scenario: String,

    /// Flood severity: low, medium, high
    #[arg(long, default_value = "medium")]
    severity: String,

    /// Rainfall override in mm/hour (flood only)
    #[arg(long)]
    rainfall: Option<f64>,

    /// Earthquake magnitude, 4-8
    #[arg(long, default_value_t = 6.0)]
    magnitude: f64,

    /// Epicenter district id (earthquake only)
    #[arg(long, default_value = "d1")]
    epicenter: String,

    /// Backend base URL (overrides config)
    #[arg(long)]
    base_url: Option<String>,

    /// Optional TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep polling live resources and the flood snapshot until Ctrl-C
    #[arg(long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    let client = ApiClient::with_timeout(&base_url, Duration::from_secs(config.api.timeout_secs))
        .map_err(user_facing)?;

    info!("Checking backend at {}", base_url);
    if !wait_until_online(&client).await {
        anyhow::bail!("Backend is not available");
    }

    let position = Coordinate::new(args.lat, args.lng);
    let outcome = run_scenario(&client, &args).await?;

    report(position, &outcome);

    if args.watch {
        watch_live(&config, client).await?;
    }

    Ok(())
}

async fn run_scenario(client: &ApiClient, args: &Args) -> Result<SimulationOutcome> {
    match args.scenario.as_str() {
        "flood" => {
            let severity: Severity = args
                .severity
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            info!("Running {severity} flood simulation");
            let result = client
                .simulate_flood(severity, args.rainfall)
                .await
                .map_err(user_facing)?;
            Ok(SimulationOutcome::Flood(result))
        }
        "earthquake" => {
            info!(
                "Running magnitude {} earthquake, epicenter {}",
                args.magnitude, args.epicenter
            );
            let result = client
                .simulate_earthquake(args.magnitude, &args.epicenter)
                .await
                .map_err(user_facing)?;
            Ok(SimulationOutcome::Earthquake(result))
        }
        other => anyhow::bail!("unknown scenario: {other} (expected flood or earthquake)"),
    }
}

fn report(position: Coordinate, outcome: &SimulationOutcome) {
    let index = district_index();
    let assessment = deodar::spatial::assess(index, Some(outcome), position);

    println!();
    match assessment.district {
        Some(district) => println!("Position is in {} ({})", district.name, district.id),
        None => println!("Position is outside all known districts"),
    }

    match &assessment.risk {
        Some(risk) => {
            let band = RiskBand::from_score(risk.risk_score);
            println!(
                "{}: risk {:.2} - {}{}",
                risk.district_name,
                risk.risk_score,
                band.label(),
                if risk.is_safe { " (safe zone)" } else { "" }
            );
        }
        None => println!("No risk data for this position in the current run"),
    }

    match &assessment.nearest_shelter {
        Some(nearest) => {
            let shelter = nearest.entity;
            println!(
                "Nearest shelter: {} ({:.1} km), capacity {}/{}",
                shelter.name, nearest.distance_km, shelter.current_occupancy, shelter.capacity
            );
            println!(
                "Directions: {}",
                directions_url(position, shelter.location)
            );
        }
        None => println!("No shelters in the current snapshot"),
    }

    let metrics = outcome.risk_metrics();
    println!(
        "Overall: {} people at risk across {} high / {} medium risk zones",
        metrics.total_population_at_risk, metrics.high_risk_zones, metrics.medium_risk_zones
    );
    println!("Advisory: {}", outcome.ai_explanation().recommendation);
}

async fn watch_live(config: &Config, client: ApiClient) -> Result<()> {
    let client = Arc::new(client);

    let resources = {
        let client = Arc::clone(&client);
        spawn_polling(
            Duration::from_secs(config.poll.resources_interval_secs),
            move || {
                let client = Arc::clone(&client);
                async move {
                    match client.resources().await {
                        Ok(units) => {
                            let available = units.iter().filter(|u| u.available).count();
                            info!("{available}/{} units available", units.len());
                        }
                        Err(e) => warn!("resource poll failed: {}", e.user_message()),
                    }
                }
            },
        )
    };

    let flood = {
        let client = Arc::clone(&client);
        spawn_polling(
            Duration::from_secs(config.poll.flood_snapshot_interval_secs),
            move || {
                let client = Arc::clone(&client);
                async move {
                    match client.flood_live().await {
                        Ok(snapshot) => info!(
                            "water {:.2} m, rain {:.0} mm/hr, 30min outlook {}",
                            snapshot.water_level_m,
                            snapshot.rainfall_intensity_mm_hr,
                            snapshot.risk_forecast_30min.label()
                        ),
                        Err(e) => warn!("flood snapshot poll failed: {}", e.user_message()),
                    }
                }
            },
        )
    };

    info!("Watching live feeds; Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    resources.stop().await;
    flood.stop().await;
    info!("Live polling stopped");

    Ok(())
}

fn user_facing(e: ApiError) -> anyhow::Error {
    anyhow::anyhow!("{}", e.user_message())
}
