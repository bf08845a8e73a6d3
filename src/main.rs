//! Elevator simulation binary.
//!
//! # Usage
//!
//! ```bash
//! # Run with config.json / _config.json until a line is entered
//! secure-elevator
//!
//! # Three rides per agent, verbose logging
//! secure-elevator --rides 3 --log-level debug
//! ```

use std::path::PathBuf;

use clap::Parser;
use secure_elevator::modules;
use secure_elevator::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Secure elevator simulation
#[derive(Parser, Debug)]
#[command(name = "secure-elevator")]
#[command(about = "Agents with security clearances sharing one elevator")]
#[command(version)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many rides per agent
    #[arg(short, long)]
    rides: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // READ CONFIGURATION
    let mut config = Config::get(args.config.as_deref())?;
    if let Some(rides) = args.rides {
        config.driver.rides_per_agent = Some(rides);
    }

    tracing::info!(agents = config.agents.len(), "elevator simulation starting");
    modules::run(config)?;

    Ok(())
}
