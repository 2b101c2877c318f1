//! Tab to profile session tracking.
//!
//! The background process owns a [`SessionRegistry`]: detections insert,
//! tab close and navigation evict. Page scraping lives behind
//! [`AccountDetector`] so nothing here depends on page structure.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::domain::{AccountInfo, Profile};
use crate::core::types::{ProfileId, TabId};

/// Best-effort detection of the account signed in on the current page.
pub trait AccountDetector {
    fn detect_current_account(&self) -> Option<AccountInfo>;
}

/// What is known about one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub account: AccountInfo,
    /// Matching stored profile, if any
    pub profile_id: Option<ProfileId>,
    pub detected_at: DateTime<Utc>,
}

/// Explicitly owned registry of active tab sessions.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<TabId, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a detection for a tab, matching it against stored profiles.
    ///
    /// Replaces any earlier session for the tab.
    pub fn record_detection(
        &mut self,
        tab: TabId,
        account: AccountInfo,
        profiles: &[Profile],
    ) -> &Session {
        let profile_id = profile_for_account(profiles, &account).map(|p| p.id.clone());
        debug!(tab, account = %account.account_id, matched = profile_id.is_some(), "session detected");

        self.sessions.insert(
            tab,
            Session {
                account,
                profile_id,
                detected_at: Utc::now(),
            },
        );
        &self.sessions[&tab]
    }

    /// Run a detector for a tab; records and returns the session when the
    /// detector finds an account.
    pub fn detect(
        &mut self,
        tab: TabId,
        detector: &dyn AccountDetector,
        profiles: &[Profile],
    ) -> Option<&Session> {
        let account = detector.detect_current_account()?;
        Some(self.record_detection(tab, account, profiles))
    }

    pub fn get(&self, tab: TabId) -> Option<&Session> {
        self.sessions.get(&tab)
    }

    /// Forget a tab (closed).
    pub fn evict(&mut self, tab: TabId) -> Option<Session> {
        let removed = self.sessions.remove(&tab);
        if removed.is_some() {
            debug!(tab, "session evicted");
        }
        removed
    }

    /// A tab navigated; keep the session only while it stays on a provider
    /// console page.
    pub fn on_navigation(&mut self, tab: TabId, still_on_provider: bool) {
        if !still_on_provider {
            self.evict(tab);
        }
    }

    /// Drop sessions pointing at a deleted profile.
    pub fn forget_profile(&mut self, profile_id: &str) {
        for session in self.sessions.values_mut() {
            if session.profile_id.as_deref() == Some(profile_id) {
                session.profile_id = None;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// The stored profile for a detected account.
///
/// Several profiles may share an account id; an exact principal match wins,
/// then the first in list order.
pub fn profile_for_account<'a>(profiles: &'a [Profile], account: &AccountInfo) -> Option<&'a Profile> {
    let mut candidates = profiles
        .iter()
        .filter(|p| p.account_id == account.account_id)
        .peekable();
    let first = *candidates.peek()?;

    let principal_match = account.principal.as_deref().and_then(|principal| {
        candidates.find(|p| {
            p.auth
                .credentials()
                .is_some_and(|pair| pair.identity == principal)
        })
    });
    Some(principal_match.unwrap_or(first))
}
