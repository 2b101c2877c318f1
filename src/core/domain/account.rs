//! Account detected on a provider page.

use crate::core::types::AccountId;

/// What a page detector reports about the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub account_id: AccountId,
    /// Signed-in user or assumed role, when the page shows it
    pub principal: Option<String>,
    pub region: Option<String>,
}

impl AccountInfo {
    pub fn new(account_id: impl Into<AccountId>) -> Self {
        Self {
            account_id: account_id.into(),
            principal: None,
            region: None,
        }
    }
}
