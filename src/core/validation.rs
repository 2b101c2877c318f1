//! Input validation for bullpen operations.
//!
//! Validates account ids, display names, and other user inputs.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::core::domain::{Auth, Profile};
use crate::error::{Result, ValidationError};

/// Whether `value` is exactly 12 ASCII digits.
pub fn is_account_id(value: &str) -> bool {
    value.len() == 12 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a cloud account id.
///
/// # Errors
///
/// Returns `ValidationError::InvalidAccountId` unless the value is exactly 12
/// ASCII digits.
pub fn validate_account_id(account_id: &str) -> Result<()> {
    if !is_account_id(account_id) {
        return Err(ValidationError::InvalidAccountId(account_id.to_string()).into());
    }
    Ok(())
}

/// Validate a display name.
///
/// # Errors
///
/// Returns `ValidationError::EmptyName` for empty or whitespace-only names.
pub fn validate_display_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    Ok(())
}

/// Whether a region looks like `xx-name-n` (e.g. `us-east-1`, `us-gov-west-1`).
pub fn looks_like_region(region: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]{2}(-[a-z]+)+-\d+$").expect("static regex"))
        .is_match(region)
}

/// Region is free text; an unusual shape is only logged.
pub fn check_region(region: &str) {
    if !looks_like_region(region) {
        warn!(region = %region, "region does not look like xx-name-n");
    }
}

/// Validate the auth configuration fields that must be well formed.
///
/// # Errors
///
/// Returns `ValidationError::InvalidField` for a federated portal URL that does
/// not parse, or a source account id that is not 12 digits.
pub fn validate_auth(auth: &Auth) -> Result<()> {
    match auth {
        Auth::CredentialPair(_) => Ok(()),
        Auth::FederatedSso(sso) => {
            if !sso.portal_url.is_empty() && url::Url::parse(&sso.portal_url).is_err() {
                return Err(ValidationError::InvalidField {
                    field: "portal_url",
                    reason: format!("not a valid URL: {}", sso.portal_url),
                }
                .into());
            }
            Ok(())
        }
        Auth::DelegatedRole(role) => {
            if let Some(source) = &role.source_account_id {
                if !is_account_id(source) {
                    return Err(ValidationError::InvalidField {
                        field: "source_account_id",
                        reason: format!("'{}' must be exactly 12 digits", source),
                    }
                    .into());
                }
            }
            Ok(())
        }
    }
}

/// Validate every user-controlled field of a profile.
pub fn validate_profile(profile: &Profile) -> Result<()> {
    validate_display_name(&profile.display_name)?;
    validate_account_id(&profile.account_id)?;
    validate_auth(&profile.auth)?;
    check_region(&profile.default_region);
    Ok(())
}
