//! farecast CLI - Ride fare estimates across providers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "farecast")]
#[command(about = "Estimate ride fares across providers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load pricing profiles from a JSON file instead of the built-in table
    #[arg(long, global = true, value_name = "FILE")]
    pricing: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress spinners and animation)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the fare for a single trip
    Estimate {
        /// Trip distance
        #[arg(short, long)]
        distance: String,

        /// Trip duration
        #[arg(short = 't', long)]
        duration: String,

        /// Distance unit (km, miles)
        #[arg(long, default_value = "km")]
        distance_unit: String,

        /// Duration unit (minutes, hours)
        #[arg(long, default_value = "minutes")]
        duration_unit: String,

        /// Surge multiplier
        #[arg(short, long, default_value_t = 1.0, value_parser = parse_surge)]
        surge: f64,

        /// Ride provider (ola, uber, namma-yatri)
        #[arg(short, long, default_value = "ola")]
        provider: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Skip the simulated estimation delay
        #[arg(long)]
        no_delay: bool,
    },

    /// List providers and their pricing
    Providers,

    /// Interactive estimation with history (default)
    Interactive {
        /// Skip the simulated estimation delay
        #[arg(long)]
        no_delay: bool,
    },
}

/// Parse a surge multiplier, accepting only values from 1.0 to 3.0.
fn parse_surge(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if (1.0..=3.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("surge multiplier must be between 1.0 and 3.0, got {value}"))
    }
}

/// Install the tracing subscriber. `RUST_LOG` takes precedence over flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let estimator = commands::load_estimator(cli.pricing.as_deref())?;

    match cli.command.unwrap_or(Commands::Interactive { no_delay: false }) {
        Commands::Estimate {
            distance,
            duration,
            distance_unit,
            duration_unit,
            surge,
            provider,
            json,
            no_delay,
        } => {
            commands::estimate::estimate(
                estimator,
                &distance,
                &duration,
                &distance_unit,
                &duration_unit,
                surge,
                &provider,
                json,
                no_delay,
                cli.quiet,
            )
            .await
        }
        Commands::Providers => commands::providers::list_providers(&estimator),
        Commands::Interactive { no_delay } => {
            commands::interactive::interactive(estimator, no_delay, cli.quiet).await
        }
    }
}
