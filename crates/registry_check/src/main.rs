use anyhow::{Context, Result};
use indicator_registry::{DescriptorFactory, RegistryConfig};

mod checks;

use checks::{CheckReport, check_email_catalogs, summarize_registry};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = RegistryConfig::from_env().context("Invalid registry configuration")?;
    log::debug!("Registry configuration: {:?}", config);

    let registry = config
        .into_builder()
        .await
        .context("Failed to read registry assets")?
        .build(&DescriptorFactory)
        .context("Failed to build indicator registry")?;

    let summary = summarize_registry(&registry);
    log::info!(
        "Indicator registry OK: {} groups ({} hidden), {} indicators",
        summary.groups,
        summary.hidden_groups,
        summary.indicators
    );

    let email_catalogs = check_email_catalogs()?;
    log::info!("Email copy OK: {} categories", email_catalogs.len());

    let report = CheckReport {
        registry: summary,
        email_catalogs,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
