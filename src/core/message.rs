//! Requests between extension surfaces and the vault.
//!
//! A closed set of operations, each with its own typed payload, dispatched
//! through one exhaustive match.

use crate::core::console;
use crate::core::document::Settings;
use crate::core::domain::{Credential, Profile};
use crate::core::types::ProfileId;
use crate::core::vault::Vault;
use crate::core::view;
use crate::error::Result;

/// One operation a surface can ask of the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// All profiles in insertion order
    GetAccounts,
    GetAccount { id: ProfileId },
    /// Decrypted credential for auto-fill
    GetCredential { id: ProfileId },
    /// Sign-in URL for a profile; marks it as used
    OpenConsole { id: ProfileId },
    TouchLastUsed { id: ProfileId },
    Search { query: String },
    GetSettings,
}

/// Reply to a [`Request`].
#[derive(Debug)]
pub enum Response {
    Accounts(Vec<Profile>),
    Account(Option<Profile>),
    Credential(Option<Credential>),
    ConsoleUrl(Option<String>),
    Settings(Settings),
    Done,
}

/// Handle a request.
///
/// Missing profiles produce empty responses, not errors.
///
/// # Errors
///
/// Returns storage errors, and validation errors for a profile whose stored
/// sign-in data cannot form a URL.
pub fn dispatch(vault: &Vault, request: Request) -> Result<Response> {
    let response = match request {
        Request::GetAccounts => Response::Accounts(vault.list()?),
        Request::GetAccount { id } => Response::Account(vault.get(&id)?),
        Request::GetCredential { id } => Response::Credential(vault.decrypt_credential(&id)?),
        Request::OpenConsole { id } => match vault.get(&id)? {
            Some(profile) => {
                let url = console::sign_in_url(&profile)?;
                vault.touch_last_used(&id)?;
                Response::ConsoleUrl(Some(url.to_string()))
            }
            None => Response::ConsoleUrl(None),
        },
        Request::TouchLastUsed { id } => {
            vault.touch_last_used(&id)?;
            Response::Done
        }
        Request::Search { query } => {
            Response::Accounts(view::filter_by_query(&vault.list()?, &query))
        }
        Request::GetSettings => Response::Settings(vault.settings()?),
    };
    Ok(response)
}
