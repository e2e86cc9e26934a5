//! AquaMeteo CLI
//!
//! Reading statistics, the weekly forecast and rain alerts from the
//! command line.

#![allow(clippy::print_stdout)]

mod report;
mod wiring;

use std::{path::PathBuf, sync::Arc};

use application::ClockPort;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use domain::DateWindow;
use domain::rain_alert::DEFAULT_HORIZON_DAYS;
use infrastructure::{AppConfig, SystemClock, init_tracing};
use tracing::{debug, warn};

/// AquaMeteo CLI
#[derive(Parser)]
#[command(name = "aquameteo-cli")]
#[command(author, version, about = "AquaMeteo water and weather CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "AQUAMETEO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize water and atmospheric readings over a date window
    ///
    /// Without bounds the current month is used.
    /// Example: aquameteo-cli stats --start 2024-06-01 --end 2024-06-15
    Stats {
        /// Water readings JSON file
        #[arg(long)]
        water: Option<PathBuf>,

        /// Atmospheric readings JSON file
        #[arg(long)]
        atmospheric: Option<PathBuf>,

        /// First day included (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Last day included (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Ignore the window and use every reading
        #[arg(long, conflicts_with_all = ["start", "end"])]
        all: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the seven-day forecast
    Forecast {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check whether rain is likely soon
    Alerts {
        /// Number of days to look ahead
        #[arg(short, long, default_value_t = DEFAULT_HORIZON_DAYS)]
        days: usize,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Window chosen on the command line, `None` meaning the default month
const fn requested_window(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    all: bool,
) -> Option<DateWindow> {
    if all {
        return Some(DateWindow::inactive());
    }
    if start.is_none() && end.is_none() {
        return None;
    }
    Some(DateWindow::new(start, end))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = AppConfig::load_from(cli.config.as_deref());
    let config = loaded.as_ref().map_or_else(|_| AppConfig::default(), Clone::clone);

    init_tracing(log_filter_from_verbosity(cli.verbose), config.log_format)?;
    if let Err(e) = loaded {
        warn!("Failed to load config, using defaults: {}", e);
    }
    debug!(?config, "Configuration loaded");

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    match cli.command {
        Commands::Stats {
            water,
            atmospheric,
            start,
            end,
            all,
            json,
        } => {
            let service = wiring::statistics_service(&config, Arc::clone(&clock));
            let store = wiring::reading_store(&config, water, atmospheric);
            let window = requested_window(start, end, all)
                .unwrap_or_else(|| service.default_window());

            let summary = service.summarize_from_store(&store, &window).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", report::statistics(&summary, &window));
            }
        },

        Commands::Forecast { json } => {
            let cache = wiring::forecast_cache(&config, clock)?;
            let entry = cache.get_cached_forecast().await;

            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                println!("{}", report::forecast(&entry));
            }
        },

        Commands::Alerts { days } => {
            let cache = wiring::forecast_cache(&config, clock)?;
            let rain_soon = cache.has_rain_forecast(days).await;
            let alerts = cache.rain_alerts().await;

            println!("{}", report::alerts(rain_soon, days, &alerts));
        },
    }

    Ok(())
}
