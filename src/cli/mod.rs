//! Command-line interface.

pub mod completions;
pub mod credential;
pub mod init;
pub mod lock;
pub mod output;
pub mod profiles;
pub mod prompt;
pub mod transfer;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::config::Config;
use crate::core::domain::Profile;
use crate::core::store::Filesystem;
use crate::core::vault::Vault;
use crate::error::{ProfileError, Result};

/// Bullpen - a local vault for cloud account profiles.
#[derive(Parser)]
#[command(
    name = "bullpen",
    about = "A local vault for cloud account profiles",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory (defaults to $BULLPEN_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the data directory, config file, and vault
    Init {
        /// Region for new profiles that do not name one
        #[arg(long)]
        region: Option<String>,
    },

    /// Add a profile
    Add(AddArgs),

    /// List profiles
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Only profiles whose name, account, group, or tags match
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show one profile
    Show {
        /// Profile id, id prefix, or name
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change fields of a profile
    Edit(EditArgs),

    /// Remove a profile
    Rm {
        /// Profile id, id prefix, or name
        id: String,
    },

    /// Mark a profile as used and print its sign-in URL
    Use {
        /// Profile id, id prefix, or name
        id: String,
    },

    /// Store or read sign-in credentials
    Credential {
        #[command(subcommand)]
        action: CredentialAction,
    },

    /// Import profiles from a file
    Import {
        #[arg(value_enum)]
        format: ImportFormat,
        /// File to read
        path: PathBuf,
    },

    /// Export all profiles to stdout
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        /// Add a password column holding a placeholder (csv only)
        #[arg(long)]
        with_password_column: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage the unlock password
    Lock {
        #[command(subcommand)]
        action: LockAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Auth mode accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthKind {
    Iam,
    Sso,
    Role,
}

/// Fields for `bullpen add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Display name
    pub name: String,
    /// 12-digit account id
    pub account_id: String,
    #[arg(long, value_enum, default_value = "iam")]
    pub auth: AuthKind,
    #[arg(short, long)]
    pub region: Option<String>,
    /// Sign-in identity (iam)
    #[arg(long)]
    pub identity: Option<String>,
    /// Prompt for the password to store with the identity (iam)
    #[arg(long)]
    pub with_secret: bool,
    /// Portal start URL (sso)
    #[arg(long)]
    pub portal_url: Option<String>,
    /// Permission set or role name (sso)
    #[arg(long)]
    pub role_name: Option<String>,
    /// Portal region (sso)
    #[arg(long)]
    pub sso_region: Option<String>,
    /// Role ARN (role)
    #[arg(long)]
    pub role_arn: Option<String>,
    /// External id for the role trust policy (role)
    #[arg(long)]
    pub external_id: Option<String>,
    /// Account that assumes the role (role)
    #[arg(long)]
    pub source_account: Option<String>,
    /// Session duration in seconds (role)
    #[arg(long)]
    pub duration: Option<u32>,
    /// Tag, repeatable
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
    #[arg(short, long)]
    pub group: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub favorite: bool,
}

/// Fields for `bullpen edit`.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Profile id, id prefix, or name
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub region: Option<String>,
    #[arg(short, long, conflicts_with = "no_group")]
    pub group: Option<String>,
    /// Remove the group label
    #[arg(long)]
    pub no_group: bool,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub favorite: Option<bool>,
    /// Tag to add, repeatable
    #[arg(long = "add-tag")]
    pub add_tags: Vec<String>,
    /// Tag to remove, repeatable
    #[arg(long = "remove-tag")]
    pub remove_tags: Vec<String>,
}

/// Credential subcommands.
#[derive(Subcommand)]
pub enum CredentialAction {
    /// Store an identity and password (read from stdin or a prompt)
    Set {
        /// Profile id, id prefix, or name
        id: String,
        /// Sign-in identity
        #[arg(long)]
        identity: String,
    },

    /// Print the decrypted password
    Get {
        /// Profile id, id prefix, or name
        id: String,
        /// Unlock password, when one is enabled
        #[arg(long, env = "BULLPEN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

/// Lock subcommands.
#[derive(Subcommand)]
pub enum LockAction {
    /// Require an unlock password before secrets are shown
    Enable {
        #[arg(long, env = "BULLPEN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Remove the unlock password
    Disable {
        #[arg(long, env = "BULLPEN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Show whether an unlock password is enabled
    Status,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
    /// Provider CLI config (INI sections)
    Config,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Supported shells for completions.
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config: &Config) -> Result<()> {
    use Command::*;

    match command {
        Init { region } => init::execute(config, region),
        Add(args) => profiles::add(config, args),
        List { json, query } => profiles::list(config, json, query.as_deref()),
        Show { id, json } => profiles::show(config, &id, json),
        Edit(args) => profiles::edit(config, args),
        Rm { id } => profiles::rm(config, &id),
        Use { id } => profiles::use_profile(config, &id),
        Credential { action } => match action {
            CredentialAction::Set { id, identity } => credential::set(config, &id, &identity),
            CredentialAction::Get { id, password } => {
                credential::get(config, &id, password.as_deref())
            }
        },
        Import { format, path } => transfer::import(config, format, &path),
        Export {
            format,
            with_password_column,
            output,
        } => transfer::export(config, format, with_password_column, output.as_deref()),
        Lock { action } => match action {
            LockAction::Enable { password } => lock::enable(config, password),
            LockAction::Disable { password } => lock::disable(config, password),
            LockAction::Status => lock::status(config),
        },
        Completions { shell } => completions::execute(shell),
    }
}

/// Open the vault in the configured data directory.
pub(crate) fn open_vault(config: &Config) -> Result<Vault> {
    Vault::open(Filesystem::new(&config.data_dir))
}

/// Find a profile by exact id, unique id prefix, or case-insensitive name.
pub(crate) fn resolve_profile(vault: &Vault, query: &str) -> Result<Profile> {
    let profiles = vault.list()?;
    let not_found = || ProfileError::NotFound(query.to_string());

    if let Some(p) = profiles.iter().find(|p| p.id == query) {
        return Ok(p.clone());
    }

    let by_prefix: Vec<&Profile> = profiles
        .iter()
        .filter(|p| !query.is_empty() && p.id.starts_with(query))
        .collect();
    if let [only] = by_prefix.as_slice() {
        return Ok((*only).clone());
    }

    let by_name: Vec<&Profile> = profiles
        .iter()
        .filter(|p| p.display_name.eq_ignore_ascii_case(query))
        .collect();
    match by_name.as_slice() {
        [only] => Ok((*only).clone()),
        _ => Err(not_found().into()),
    }
}
