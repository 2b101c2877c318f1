//! Sign-in handoff URLs.
//!
//! bullpen never completes a sign-in itself; it builds the URL of the
//! provider's own login flow for a profile and hands it to the caller.

use url::Url;

use crate::core::domain::{Auth, Profile};
use crate::error::{Result, ValidationError};

const SWITCH_ROLE_URL: &str = "https://signin.aws.amazon.com/switchrole";

/// Build the sign-in URL for a profile.
///
/// - credential pair: the account's sign-in page with the default region
/// - federated SSO: the portal start URL
/// - delegated role: the switch-role page prefilled with role and account
///
/// # Errors
///
/// Returns `ValidationError::InvalidField` if a stored URL does not parse or
/// the role ARN has no role name.
pub fn sign_in_url(profile: &Profile) -> Result<Url> {
    match &profile.auth {
        Auth::CredentialPair(_) => {
            let mut url = parse(
                "account sign-in URL",
                &format!(
                    "https://{}.signin.aws.amazon.com/console",
                    profile.account_id
                ),
            )?;
            url.query_pairs_mut()
                .append_pair("region", &profile.default_region);
            Ok(url)
        }
        Auth::FederatedSso(sso) => parse("portal_url", &sso.portal_url),
        Auth::DelegatedRole(role) => {
            let role_name = role
                .role_arn
                .rsplit_once(":role/")
                .map(|(_, path)| path.rsplit('/').next().unwrap_or(path))
                .filter(|name| !name.is_empty())
                .ok_or_else(|| ValidationError::InvalidField {
                    field: "role_arn",
                    reason: format!("no role name in '{}'", role.role_arn),
                })?;

            let mut url = parse("switch-role URL", SWITCH_ROLE_URL)?;
            url.query_pairs_mut()
                .append_pair("roleName", role_name)
                .append_pair("account", &profile.account_id)
                .append_pair("displayName", &profile.display_name);
            Ok(url)
        }
    }
}

fn parse(field: &'static str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| {
        ValidationError::InvalidField {
            field,
            reason: format!("{}: {}", raw, e),
        }
        .into()
    })
}
