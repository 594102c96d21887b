//! Route.dog - extract delivery addresses from photos and geocode them.
//!
//! Runs the HTTP API used by the Route.dog app, and exposes the same two
//! operations as one-shot commands.
//!
//! # Usage
//!
//! ```bash
//! # Run the API on port 8080
//! routedog serve
//!
//! # Extract and geocode the addresses in a photo
//! routedog extract ./manifest.jpg
//!
//! # Geocode one address
//! routedog geocode "4600 Silver Hill Rd, Washington, DC 20233"
//!
//! # View configuration
//! routedog config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;
mod server;

/// Route.dog - extract delivery addresses from photos and geocode them.
#[derive(Parser, Debug)]
#[command(name = "routedog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve(cli::serve::ServeArgs),

    /// Extract and geocode the addresses in an image file
    Extract(cli::extract::ExtractArgs),

    /// Geocode a single address
    Geocode(cli::geocode::GeocodeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match &cli.config {
        Some(path) => {
            let path = routedog_core::config::expand_path(&path.to_string_lossy());
            routedog_core::Config::load_from(&path)?
        }
        None => match routedog_core::Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load config: {e}\n  \
                     Using default configuration. Check your config file with `routedog config path`."
                );
                routedog_core::Config::default()
            }
        },
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Route.dog v{}", routedog_core::VERSION);

    match cli.command {
        Commands::Serve(args) => cli::serve::execute(args, config).await,
        Commands::Extract(args) => cli::extract::execute(args, &config).await,
        Commands::Geocode(args) => cli::geocode::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args, &config, cli.config.as_deref()).await,
    }
}
