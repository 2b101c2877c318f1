//! Import and export commands.

use std::path::Path;

use tracing::debug;

use crate::cli::{open_vault, output, ExportFormat, ImportFormat};
use crate::core::config::Config;
use crate::error::{ImportError, Result};

/// Import profiles from a file.
pub fn import(config: &Config, format: ImportFormat, path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path).map_err(ImportError::Read)?;
    debug!(path = %path.display(), bytes = text.len(), "read import file");

    let vault = open_vault(config)?;
    let summary = match format {
        ImportFormat::Json => vault.import_json(&text)?,
        ImportFormat::Csv => vault.import_csv(&text)?,
        ImportFormat::Config => vault.import_provider_config(&text)?,
    };

    output::success(&format!("import finished: {}", summary));
    if summary.imported > 0 && matches!(format, ImportFormat::Json) {
        output::hint("passwords are never imported; set them with: bullpen credential set");
    }
    Ok(())
}

/// Export all profiles.
pub fn export(
    config: &Config,
    format: ExportFormat,
    with_password_column: bool,
    destination: Option<&Path>,
) -> Result<()> {
    let vault = open_vault(config)?;
    let text = match format {
        ExportFormat::Json => vault.export_json()?,
        ExportFormat::Csv => vault.export_csv(with_password_column)?,
    };

    match destination {
        Some(path) => {
            std::fs::write(path, &text)?;
            output::success(&format!("exported to {}", output::path(path)));
        }
        None => print!("{}", text),
    }
    Ok(())
}
