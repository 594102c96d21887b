//! The `routedog extract` command: run address extraction on a local image.

use clap::Args;
use routedog_core::{AddressService, Config, ImageInput, ParseAddressesResponse};
use std::path::PathBuf;

/// Arguments for the `extract` command.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Image file containing delivery addresses
    #[arg(required = true)]
    pub image: PathBuf,
}

/// Execute the extract command.
pub async fn execute(args: ExtractArgs, config: &Config) -> anyhow::Result<()> {
    if !args.image.is_file() {
        anyhow::bail!(
            "Image file does not exist: {:?}\n\n  Hint: Check the file path and try again.",
            args.image
        );
    }

    let bytes = std::fs::read(&args.image)?;
    let format = args
        .image
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("jpeg");
    let image = ImageInput::from_bytes(&bytes, format);

    let service = AddressService::from_config(config)?;
    let addresses = service.parse_image(&image).await?;

    let response = ParseAddressesResponse { addresses };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
