//! The `routedog config` command for configuration management.

use clap::{Args, Subcommand};
use routedog_core::config::expand_path;
use routedog_core::Config;
use std::path::{Path, PathBuf};

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration
    Show,

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
///
/// `explicit_path` is the global `--config` flag, which takes precedence
/// over the platform default for `path` and `init`.
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    explicit_path: Option<&Path>,
) -> anyhow::Result<()> {
    let path = config_path(explicit_path);

    match args.command {
        ConfigCommand::Show => {
            println!("{}", config.to_toml()?);
        }

        ConfigCommand::Path => {
            println!("{}", path.display());
        }

        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = Config::default().to_toml()?;
            std::fs::write(&path, toml)?;

            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn config_path(explicit_path: Option<&Path>) -> PathBuf {
    explicit_path
        .map(|p| expand_path(&p.to_string_lossy()))
        .unwrap_or_else(Config::default_path)
}
