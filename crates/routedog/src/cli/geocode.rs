//! The `routedog geocode` command.

use clap::Args;
use routedog_core::{geocode_or_unresolved, CensusGeocoder, Config};

/// Arguments for the `geocode` command.
#[derive(Args, Debug)]
pub struct GeocodeArgs {
    /// Free-form address, e.g. "4600 Silver Hill Rd, Washington, DC 20233"
    #[arg(required = true)]
    pub address: String,
}

/// Execute the geocode command.
///
/// Same fallback as the HTTP endpoint: an unresolved address prints with
/// zero coordinates rather than failing.
pub async fn execute(args: GeocodeArgs, config: &Config) -> anyhow::Result<()> {
    if args.address.is_empty() {
        anyhow::bail!("Address is required");
    }

    // Geocoding needs no API key, so skip building the full service.
    let geocoder = CensusGeocoder::new(&config.geocoding);
    let address = geocode_or_unresolved(&geocoder, &args.address).await;

    println!("{}", serde_json::to_string_pretty(&address)?);
    Ok(())
}
