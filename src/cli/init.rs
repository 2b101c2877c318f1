//! Init command - create the data directory and vault.

use tracing::info;

use crate::cli::{open_vault, output};
use crate::core::config::Config;
use crate::error::Result;

/// Initialize bullpen in the configured data directory.
///
/// Writes `config.toml` when missing or when a region is given, and applies
/// the configured region to the vault settings.
pub fn execute(config: &Config, region: Option<String>) -> Result<()> {
    let mut config = config.clone();
    let region_given = region.is_some();
    if region_given {
        config.default_region = region;
    }
    config.validate()?;

    if region_given || !config.path().exists() {
        config.save()?;
    }

    let vault = open_vault(&config)?;
    if let Some(region) = &config.default_region {
        let mut settings = vault.settings()?;
        if settings.default_region != *region {
            settings.default_region = region.clone();
            vault.update_settings(settings)?;
        }
    }

    info!(dir = %config.data_dir.display(), "initialized");
    output::success(&format!("vault ready in {}", output::path(&config.data_dir)));
    Ok(())
}
