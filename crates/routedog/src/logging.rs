//! Logging initialization and configuration.
//!
//! Uses the `tracing` ecosystem for structured logging with support for
//! both human-readable and JSON output formats.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem.
///
/// # Arguments
///
/// * `level` - Default level directive when `RUST_LOG` is unset.
/// * `json_format` - If true, outputs structured JSON logs; otherwise pretty-printed.
///
/// # Notes
///
/// - Log output goes to stderr (stdout is reserved for command output)
/// - The RUST_LOG environment variable can override the log level
pub fn init(level: &str, json_format: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Initialize logging with configuration from Config.
pub fn init_from_config(
    config: &routedog_core::Config,
    verbose_override: bool,
    json_logs_override: bool,
) {
    let level = default_level(&config.logging.level, verbose_override);
    let json_format = json_logs_override || config.logging.format == "json";
    init(&level, json_format);
}

/// Pick the default filter directive; `--verbose` never lowers an explicit trace level.
fn default_level(configured: &str, verbose: bool) -> String {
    let base = match configured {
        "error" | "warn" | "info" | "debug" | "trace" => configured,
        _ => "info",
    };
    if verbose && base != "trace" {
        "debug".to_string()
    } else {
        base.to_string()
    }
}
