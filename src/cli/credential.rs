//! Credential commands.
//!
//! `set` reads the password from piped stdin or a hidden prompt; `get` prints
//! the decrypted password alone so it can be piped.

use crate::cli::{open_vault, output, prompt, resolve_profile};
use crate::core::config::Config;
use crate::core::message::{dispatch, Request, Response};
use crate::error::{ProfileError, Result};

/// Store an identity and password on a profile.
pub fn set(config: &Config, id: &str, identity: &str) -> Result<()> {
    let vault = open_vault(config)?;
    let profile = resolve_profile(&vault, id)?;

    let secret = prompt::secret(&format!("Password for {}", identity))?;
    if secret.is_empty() {
        output::warn("empty password, storing identity only");
    }

    vault.set_credential(&profile.id, identity, &secret)?;
    output::success(&format!(
        "credential stored for {}",
        output::key(&profile.display_name)
    ));
    Ok(())
}

/// Print the decrypted password of a profile.
pub fn get(config: &Config, id: &str, password: Option<&str>) -> Result<()> {
    let mut vault = open_vault(config)?;
    let profile = resolve_profile(&vault, id)?;

    if vault.is_locked() {
        let password = prompt::unlock_password(password.map(str::to_string))?;
        if !vault.unlock(&password)? {
            return Err(ProfileError::WrongPassword.into());
        }
    }

    match dispatch(&vault, Request::GetCredential { id: profile.id })? {
        Response::Credential(Some(credential)) if credential.has_secret() => {
            output::data(&credential.secret);
            Ok(())
        }
        Response::Credential(Some(_)) => {
            output::warn("no password stored, or it could not be decrypted");
            Ok(())
        }
        _ => Err(ProfileError::NotFound(id.to_string()).into()),
    }
}
