//! Bullpen - a local vault for cloud account profiles.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bullpen::cli::output;
use bullpen::cli::{execute, Cli};
use bullpen::core::config::Config;
use bullpen::core::constants::LOG_ENV;
use bullpen::error::{Error, ImportError, ProfileError};

fn main() {
    let cli = Cli::parse();
    let config = Config::resolve_data_dir(cli.data_dir.as_deref()).and_then(Config::load);

    // BULLPEN_LOG wins, then --verbose, then the config file
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            return EnvFilter::new("bullpen=debug");
        }
        config
            .as_ref()
            .ok()
            .and_then(|c| c.log.as_deref())
            .and_then(|log| EnvFilter::try_new(log).ok())
            .unwrap_or_else(|| EnvFilter::new("bullpen=warn"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = config.and_then(|config| execute(cli.command, &config)) {
        let suggestion = match &e {
            Error::Profile(ProfileError::NotFound(_)) => Some("run: bullpen list"),
            Error::Profile(ProfileError::Locked | ProfileError::WrongPassword) => {
                Some("pass --password or set BULLPEN_PASSWORD")
            }
            Error::Profile(ProfileError::DuplicateAccount(_)) => {
                Some("duplicates are rejected by settings.reject_duplicate_accounts")
            }
            Error::Import(ImportError::Parse { .. }) => {
                Some("json needs an array or export envelope; csv needs a header and a row")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
