//! CSV export and import.
//!
//! Exported columns: `name,accountId,authType,defaultRegion,color,tags,identity`
//! plus an optional `password` column that only ever holds a placeholder.

use std::borrow::Cow;

use tracing::debug;

use super::{fallback_name, Parsed};
use crate::core::constants::PASSWORD_PLACEHOLDER;
use crate::core::domain::{
    Auth, AuthMode, CredentialPair, DelegatedRoleConfig, FederatedConfig, NewProfile, Profile,
};
use crate::core::tokenize::{split_csv_line, split_csv_records};
use crate::core::validation::is_account_id;
use crate::error::{ImportError, Result};

const HEADER: [&str; 7] = [
    "name",
    "accountId",
    "authType",
    "defaultRegion",
    "color",
    "tags",
    "identity",
];

/// Quote a value when it contains a comma, quote, or line break.
pub fn escape(value: &str) -> Cow<'_, str> {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// The identity column: user name, SSO role name, or role ARN.
fn identity_of(auth: &Auth) -> &str {
    match auth {
        Auth::CredentialPair(pair) => &pair.identity,
        Auth::FederatedSso(sso) => &sso.role_name,
        Auth::DelegatedRole(role) => &role.role_arn,
    }
}

/// Serialize profiles as CSV, one row per profile.
///
/// With `password_column`, credential-pair rows get a placeholder telling the
/// user to re-enter the password; no secret is ever written.
pub fn export(profiles: &[Profile], password_column: bool) -> String {
    let mut out = HEADER.join(",");
    if password_column {
        out.push_str(",password");
    }
    out.push('\n');

    for profile in profiles {
        let tags = profile.tags.join(";");
        let mut row = vec![
            escape(&profile.display_name),
            escape(&profile.account_id),
            Cow::Borrowed(profile.auth_mode().label()),
            escape(&profile.default_region),
            escape(profile.color.as_deref().unwrap_or("")),
            escape(&tags),
            escape(identity_of(&profile.auth)),
        ];
        if password_column {
            let placeholder = match profile.auth_mode() {
                AuthMode::CredentialPair => PASSWORD_PLACEHOLDER,
                _ => "",
            };
            row.push(escape(placeholder));
        }
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    AccountId,
    AuthType,
    Region,
    Color,
    Tags,
    Identity,
    Group,
    Favorite,
}

/// Map a header cell to a column. Matching ignores case, spaces, and
/// punctuation, so `accountId`, `account_id`, and `AWS Account ID` agree.
fn column_for(header: &str) -> Option<Column> {
    let key: String = header
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();

    let column = match key.as_str() {
        "name" | "displayname" | "accountname" | "profile" | "profilename" => Column::Name,
        "accountid" | "awsaccountid" | "account" | "accountnumber" | "provideraccountid" => {
            Column::AccountId
        }
        "authtype" | "authmode" | "auth" | "type" => Column::AuthType,
        "defaultregion" | "region" => Column::Region,
        "color" | "colour" | "colortag" => Column::Color,
        "tags" | "labels" => Column::Tags,
        "identity" | "username" | "user" | "iamuser" | "iamusername" | "login" => {
            Column::Identity
        }
        "group" | "grouplabel" | "folder" => Column::Group,
        "favorite" | "favourite" | "isfavorite" | "starred" => Column::Favorite,
        _ => return None,
    };
    Some(column)
}

struct Row<'a> {
    columns: &'a [Option<Column>],
    fields: Vec<String>,
}

impl Row<'_> {
    fn get(&self, column: Column) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| *c == Some(column))
            .and_then(|i| self.fields.get(i))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    fn into_candidate(self) -> Option<NewProfile> {
        // Spreadsheets often format ids as 1234-5678-9012.
        let account_id: String = self
            .get(Column::AccountId)?
            .chars()
            .filter(|c| *c != '-' && *c != ' ')
            .collect();
        if !is_account_id(&account_id) {
            return None;
        }

        let identity = self.get(Column::Identity).unwrap_or("").to_string();
        let mode = self
            .get(Column::AuthType)
            .and_then(AuthMode::from_label)
            .unwrap_or(AuthMode::CredentialPair);
        let auth = match mode {
            AuthMode::CredentialPair => Auth::CredentialPair(CredentialPair {
                identity,
                encrypted_secret: String::new(),
            }),
            AuthMode::FederatedSso => Auth::FederatedSso(FederatedConfig {
                account_id: account_id.clone(),
                role_name: identity,
                ..Default::default()
            }),
            AuthMode::DelegatedRole => Auth::DelegatedRole(DelegatedRoleConfig {
                role_arn: identity,
                ..Default::default()
            }),
        };

        let tags = self
            .get(Column::Tags)
            .map(|t| t.split(';').map(str::to_string).collect())
            .unwrap_or_default();
        let favorite = self
            .get(Column::Favorite)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "yes" | "1" | "y"))
            .unwrap_or(false);

        Some(NewProfile {
            display_name: self
                .get(Column::Name)
                .map(str::to_string)
                .unwrap_or_else(|| fallback_name(&account_id)),
            default_region: self.get(Column::Region).map(str::to_string),
            color: self.get(Column::Color).map(str::to_string),
            group: self.get(Column::Group).map(str::to_string),
            account_id,
            auth,
            secret: None,
            tags,
            favorite,
        })
    }
}

/// Parse CSV text with a header row.
///
/// # Errors
///
/// Returns `ImportError::Parse` when there is no header plus at least one
/// data row. Rows without a valid account id are counted as skipped.
pub fn parse(text: &str) -> Result<Parsed> {
    let records: Vec<String> = split_csv_records(text)
        .into_iter()
        .filter(|r| !r.trim().is_empty())
        .collect();

    let Some((header, rows)) = records.split_first().filter(|(_, rows)| !rows.is_empty()) else {
        return Err(
            ImportError::parse("csv", "need a header row and at least one data row").into(),
        );
    };

    let columns: Vec<Option<Column>> = split_csv_line(header)
        .iter()
        .map(|h| column_for(h))
        .collect();
    if !columns.contains(&Some(Column::AccountId)) {
        debug!("csv header has no account id column");
    }

    let mut parsed = Parsed::default();
    for (index, record) in rows.iter().enumerate() {
        let row = Row {
            columns: &columns,
            fields: split_csv_line(record),
        };
        match row.into_candidate() {
            Some(candidate) => parsed.candidates.push(candidate),
            None => {
                debug!(row = index + 1, "skipping csv row without a valid account id");
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}
