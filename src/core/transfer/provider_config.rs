//! Provider CLI config import.
//!
//! Reads INI-style `~/.aws/config` text:
//!
//! ```text
//! [profile dev]
//! sso_start_url = https://example.awsapps.com/start
//! sso_region = us-east-1
//! sso_account_id = 123456789012
//! sso_role_name = Admin
//! region = us-west-2
//!
//! [profile ops]
//! role_arn = arn:aws:iam::210987654321:role/Ops
//! source_profile = dev
//! ```
//!
//! A profile section becomes a candidate only when an account id can be
//! resolved, either from `sso_account_id` or from the role ARN.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::Parsed;
use crate::core::domain::{Auth, DelegatedRoleConfig, FederatedConfig, NewProfile};
use crate::core::tokenize::{parse_sections, Section, PROFILE_KIND, SSO_SESSION_KIND};
use crate::core::validation::is_account_id;
use crate::error::Result;

/// Recognized keys, already normalized (lowercase, underscores).
mod keys {
    pub const REGION: &str = "region";
    pub const ROLE_ARN: &str = "role_arn";
    pub const SOURCE_PROFILE: &str = "source_profile";
    pub const EXTERNAL_ID: &str = "external_id";
    pub const DURATION_SECONDS: &str = "duration_seconds";
    pub const SSO_START_URL: &str = "sso_start_url";
    pub const SSO_REGION: &str = "sso_region";
    pub const SSO_ACCOUNT_ID: &str = "sso_account_id";
    pub const SSO_ROLE_NAME: &str = "sso_role_name";
    pub const SSO_SESSION: &str = "sso_session";
}

/// Extract the 12-digit account id embedded in a role ARN.
pub fn account_from_role_arn(arn: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^arn:[\w-]+:iam::(\d{12}):role/.+$").expect("static regex"))
        .captures(arn.trim())
        .map(|caps| caps[1].to_string())
}

fn is_profile_section(section: &Section) -> bool {
    matches!(section.kind.as_deref(), None | Some(PROFILE_KIND))
}

/// Account id for a profile section, if one can be resolved.
fn account_of(section: &Section) -> Option<String> {
    section
        .get(keys::SSO_ACCOUNT_ID)
        .filter(|id| is_account_id(id))
        .map(str::to_string)
        .or_else(|| section.get(keys::ROLE_ARN).and_then(account_from_role_arn))
}

/// Shared SSO settings from an `[sso-session name]` block.
struct SsoSession<'a> {
    start_url: Option<&'a str>,
    region: Option<&'a str>,
}

/// Parse provider config text into candidates.
///
/// Never fails: unrecognized keys are ignored and unusable profile sections
/// are counted as skipped.
pub fn parse(text: &str) -> Result<Parsed> {
    let sections = parse_sections(text);

    let sessions: HashMap<&str, SsoSession<'_>> = sections
        .iter()
        .filter(|s| s.kind.as_deref() == Some(SSO_SESSION_KIND))
        .map(|s| {
            (
                s.name.as_str(),
                SsoSession {
                    start_url: s.get(keys::SSO_START_URL),
                    region: s.get(keys::SSO_REGION),
                },
            )
        })
        .collect();

    // Only consulted for `source_profile` references
    let accounts: HashMap<&str, String> = sections
        .iter()
        .filter(|s| is_profile_section(s))
        .filter_map(|s| account_of(s).map(|id| (s.name.as_str(), id)))
        .collect();

    let mut parsed = Parsed::default();
    for section in sections.iter().filter(|s| is_profile_section(s)) {
        let Some(account_id) = account_of(section) else {
            debug!(profile = %section.name, "dropping config section without account id");
            parsed.skipped += 1;
            continue;
        };

        let session = section
            .get(keys::SSO_SESSION)
            .and_then(|name| sessions.get(name));
        let start_url = section
            .get(keys::SSO_START_URL)
            .or_else(|| session.and_then(|s| s.start_url));
        let sso_region = section
            .get(keys::SSO_REGION)
            .or_else(|| session.and_then(|s| s.region));

        let auth = if let Some(start_url) = start_url {
            Auth::FederatedSso(FederatedConfig {
                portal_url: start_url.to_string(),
                account_id: account_id.clone(),
                role_name: section.get(keys::SSO_ROLE_NAME).unwrap_or("").to_string(),
                sso_region: sso_region.map(str::to_string),
            })
        } else if let Some(role_arn) = section.get(keys::ROLE_ARN) {
            Auth::DelegatedRole(DelegatedRoleConfig {
                role_arn: role_arn.to_string(),
                external_id: section.get(keys::EXTERNAL_ID).map(str::to_string),
                source_account_id: section
                    .get(keys::SOURCE_PROFILE)
                    .and_then(|name| accounts.get(name))
                    .cloned(),
                session_duration_seconds: section
                    .get(keys::DURATION_SECONDS)
                    .and_then(|d| d.parse().ok()),
            })
        } else {
            Auth::identity("")
        };

        parsed.candidates.push(NewProfile {
            display_name: section.name.clone(),
            account_id,
            default_region: section
                .get(keys::REGION)
                .or(sso_region)
                .map(str::to_string),
            auth,
            ..Default::default()
        });
    }

    Ok(parsed)
}
