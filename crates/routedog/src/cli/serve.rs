//! The `routedog serve` command.

use clap::Args;
use routedog_core::{AddressService, Config};

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
}

/// Execute the serve command.
pub async fn execute(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    apply_overrides(args, &mut config)?;

    let service = AddressService::from_config(&config)?;

    tracing::info!(
        model = %config.vision.model,
        geocoder = %config.geocoding.endpoint,
        "Starting Route.dog API v{}",
        routedog_core::VERSION
    );

    crate::server::serve(&config.server, service).await
}

/// Apply `--host` / `--port` on top of the loaded config and re-check it.
fn apply_overrides(args: ServeArgs, config: &mut Config) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = Config::default();
        let args = ServeArgs {
            host: Some("127.0.0.1".to_string()),
            port: Some(9090),
        };
        apply_overrides(args, &mut config).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = Config::default();
        let args = ServeArgs {
            host: None,
            port: None,
        };
        apply_overrides(args, &mut config).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_zero_port_override_is_rejected() {
        let mut config = Config::default();
        let args = ServeArgs {
            host: None,
            port: Some(0),
        };
        let err = apply_overrides(args, &mut config).unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }
}
