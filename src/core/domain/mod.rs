//! Domain types.

mod account;
mod credential;
pub mod profile;
mod summary;

pub use account::AccountInfo;
pub use credential::Credential;
pub use profile::{
    Auth, AuthMode, CredentialPair, DelegatedRoleConfig, FederatedConfig, NewProfile, Profile,
};
pub use summary::ImportSummary;
