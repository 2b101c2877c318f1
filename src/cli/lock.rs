//! Unlock password commands.

use crate::cli::{open_vault, output, prompt};
use crate::core::config::Config;
use crate::error::Result;

/// Enable the unlock password.
pub fn enable(config: &Config, password: Option<String>) -> Result<()> {
    let mut vault = open_vault(config)?;
    if vault.unlock_enabled()? {
        output::warn("unlock password already enabled");
        return Ok(());
    }

    let password = prompt::new_password(password)?;
    vault.enable_unlock(&password)?;
    output::success("unlock password enabled");
    Ok(())
}

/// Disable the unlock password.
pub fn disable(config: &Config, password: Option<String>) -> Result<()> {
    let mut vault = open_vault(config)?;
    if !vault.unlock_enabled()? {
        output::dimmed("unlock password is not enabled");
        return Ok(());
    }

    let password = prompt::unlock_password(password)?;
    vault.disable_unlock(&password)?;
    output::success("unlock password disabled");
    Ok(())
}

/// Report whether the unlock password is enabled.
pub fn status(config: &Config) -> Result<()> {
    let vault = open_vault(config)?;
    let settings = vault.settings()?;

    output::kv("unlock", if vault.unlock_enabled()? { "enabled" } else { "disabled" });
    output::kv("auto-fill", if settings.auto_fill { "on" } else { "off" });
    output::kv("region", &settings.default_region);
    Ok(())
}
