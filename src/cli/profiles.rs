//! Profile commands: add, list, show, edit, rm, use.

use tracing::info;

use crate::cli::{open_vault, output, prompt, resolve_profile, AddArgs, AuthKind, EditArgs};
use crate::core::config::Config;
use crate::core::domain::{Auth, DelegatedRoleConfig, FederatedConfig, NewProfile, Profile};
use crate::core::message::{dispatch, Request, Response};
use crate::core::transfer::json::redact;
use crate::core::view;
use crate::error::{ProfileError, Result, StoreError, ValidationError};

/// First characters of an id, enough to address a profile.
fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    value.filter(|v| !v.trim().is_empty()).ok_or_else(|| {
        ValidationError::InvalidField {
            field,
            reason: "required for this auth mode".to_string(),
        }
        .into()
    })
}

fn to_json(profiles: &[Profile]) -> Result<String> {
    let mut profiles = profiles.to_vec();
    profiles.iter_mut().for_each(redact);
    Ok(serde_json::to_string_pretty(&profiles).map_err(StoreError::Serialize)?)
}

/// Add a profile.
pub fn add(config: &Config, args: AddArgs) -> Result<()> {
    let vault = open_vault(config)?;

    let auth = match args.auth {
        AuthKind::Iam => Auth::identity(args.identity.unwrap_or_default()),
        AuthKind::Sso => Auth::FederatedSso(FederatedConfig {
            portal_url: required(args.portal_url, "portal_url")?,
            account_id: args.account_id.clone(),
            role_name: args.role_name.unwrap_or_default(),
            sso_region: args.sso_region,
        }),
        AuthKind::Role => Auth::DelegatedRole(DelegatedRoleConfig {
            role_arn: required(args.role_arn, "role_arn")?,
            external_id: args.external_id,
            source_account_id: args.source_account,
            session_duration_seconds: args.duration,
        }),
    };

    let secret = match (args.with_secret, args.auth) {
        (true, AuthKind::Iam) => Some(prompt::secret("Password")?),
        (true, _) => {
            output::warn("--with-secret only applies to iam profiles");
            None
        }
        (false, _) => None,
    };

    let profile = vault.create(NewProfile {
        display_name: args.name,
        account_id: args.account_id,
        default_region: args.region,
        auth,
        secret: secret.map(|s| (*s).clone()),
        tags: args.tags,
        group: args.group,
        color: args.color,
        favorite: args.favorite,
    })?;

    output::success(&format!(
        "added {} ({})",
        output::key(&profile.display_name),
        short_id(&profile.id)
    ));
    Ok(())
}

/// List profiles, grouped for display.
pub fn list(config: &Config, json: bool, query: Option<&str>) -> Result<()> {
    let vault = open_vault(config)?;
    let profiles = match dispatch(
        &vault,
        Request::Search {
            query: query.unwrap_or_default().to_string(),
        },
    )? {
        Response::Accounts(profiles) => profiles,
        _ => Vec::new(),
    };

    if json {
        output::data(&to_json(&profiles)?);
    } else if profiles.is_empty() {
        output::dimmed(if query.is_some() {
            "no matching profiles"
        } else {
            "no profiles stored"
        });
    } else {
        for (group, members) in view::group_for_display(&profiles) {
            output::blank();
            output::header(&format!("{} ({})", group, members.len()));
            output::rule();
            for p in members {
                output::list_item(&format!(
                    "{}  {}  {}  {}",
                    output::key(short_id(&p.id)),
                    p.display_name,
                    p.account_id,
                    p.auth_mode()
                ));
            }
        }
    }
    Ok(())
}

/// Show one profile.
pub fn show(config: &Config, id: &str, json: bool) -> Result<()> {
    let vault = open_vault(config)?;
    let profile = resolve_profile(&vault, id)?;

    if json {
        output::data(&to_json(std::slice::from_ref(&profile))?);
        return Ok(());
    }

    output::header(&profile.display_name);
    output::rule();
    output::kv("id", &profile.id);
    output::kv("account", &profile.account_id);
    output::kv("region", &profile.default_region);
    output::kv("auth", profile.auth_mode());

    match &profile.auth {
        Auth::CredentialPair(pair) => {
            output::kv("identity", &pair.identity);
            output::kv("secret", if profile.has_secret() { "stored" } else { "none" });
        }
        Auth::FederatedSso(sso) => {
            output::kv("portal", &sso.portal_url);
            output::kv("role", &sso.role_name);
            if let Some(region) = &sso.sso_region {
                output::kv("sso region", region);
            }
        }
        Auth::DelegatedRole(role) => {
            output::kv("role arn", &role.role_arn);
            if let Some(external_id) = &role.external_id {
                output::kv("external", external_id);
            }
            if let Some(source) = &role.source_account_id {
                output::kv("source", source);
            }
            if let Some(duration) = role.session_duration_seconds {
                output::kv("duration", format!("{}s", duration));
            }
        }
    }

    if !profile.tags.is_empty() {
        output::kv("tags", profile.tags.join(", "));
    }
    if let Some(group) = &profile.group {
        output::kv("group", group);
    }
    if let Some(color) = &profile.color {
        output::kv("color", color);
    }
    if profile.favorite {
        output::kv("favorite", "yes");
    }
    output::kv("created", profile.created_at.format("%Y-%m-%d %H:%M"));
    if let Some(used) = profile.last_used_at {
        output::kv("last used", used.format("%Y-%m-%d %H:%M"));
    }
    Ok(())
}

/// Change fields of a profile.
pub fn edit(config: &Config, args: EditArgs) -> Result<()> {
    let vault = open_vault(config)?;
    let mut profile = resolve_profile(&vault, &args.id)?;

    if let Some(name) = args.name {
        profile.display_name = name.trim().to_string();
    }
    if let Some(region) = args.region {
        profile.default_region = region;
    }
    if args.no_group {
        profile.group = None;
    } else if let Some(group) = args.group {
        profile.group = Some(group).filter(|g| !g.trim().is_empty());
    }
    if let Some(color) = args.color {
        profile.color = Some(color).filter(|c| !c.is_empty());
    }
    if let Some(favorite) = args.favorite {
        profile.favorite = favorite;
    }
    for tag in &args.add_tags {
        profile.add_tag(tag);
    }
    profile
        .tags
        .retain(|t| !args.remove_tags.iter().any(|r| r.trim() == t.as_str()));

    let name = profile.display_name.clone();
    vault.update(profile)?;
    output::success(&format!("updated {}", output::key(&name)));
    Ok(())
}

/// Remove a profile.
pub fn rm(config: &Config, id: &str) -> Result<()> {
    let vault = open_vault(config)?;
    let profile = resolve_profile(&vault, id)?;

    info!(id = %profile.id, "removing profile");
    vault.delete(&profile.id)?;
    output::success(&format!("removed {}", output::key(&profile.display_name)));
    Ok(())
}

/// Mark a profile as used and print its sign-in URL.
pub fn use_profile(config: &Config, id: &str) -> Result<()> {
    let vault = open_vault(config)?;
    let profile = resolve_profile(&vault, id)?;

    match dispatch(&vault, Request::OpenConsole { id: profile.id })? {
        Response::ConsoleUrl(Some(url)) => {
            output::data(&url);
            Ok(())
        }
        _ => Err(ProfileError::NotFound(id.to_string()).into()),
    }
}
