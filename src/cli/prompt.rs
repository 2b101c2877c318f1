//! Hidden input for secrets and unlock passwords.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::error::{ProfileError, Result, ValidationError};

/// Read a secret from piped stdin, or prompt with hidden input.
pub fn secret(prompt: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        let mut input = Zeroizing::new(String::new());
        io::stdin().read_line(&mut *input)?;
        return Ok(Zeroizing::new(input.trim_end_matches(&['\r', '\n'][..]).to_string()));
    }

    let value = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(Zeroizing::new(value))
}

/// The unlock password: `given`, else a prompt on a terminal.
///
/// # Errors
///
/// Returns `ProfileError::Locked` when none was given and there is no
/// terminal to ask on.
pub fn unlock_password(given: Option<String>) -> Result<Zeroizing<String>> {
    if let Some(password) = given {
        return Ok(Zeroizing::new(password));
    }
    if !io::stdin().is_terminal() {
        return Err(ProfileError::Locked.into());
    }

    let value = Password::new()
        .with_prompt("Unlock password")
        .interact()?;
    Ok(Zeroizing::new(value))
}

/// A new unlock password: `given`, else a confirmed prompt.
pub fn new_password(given: Option<String>) -> Result<Zeroizing<String>> {
    if let Some(password) = given {
        return Ok(Zeroizing::new(password));
    }
    if !io::stdin().is_terminal() {
        return Err(ValidationError::InvalidField {
            field: "password",
            reason: "pass --password when not on a terminal".to_string(),
        }
        .into());
    }

    let value = Password::new()
        .with_prompt("New unlock password")
        .with_confirmation("Confirm password", "passwords do not match")
        .interact()?;
    Ok(Zeroizing::new(value))
}
