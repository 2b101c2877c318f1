//! Derived views over profiles: search and display grouping.
//!
//! Pure functions; nothing here is persisted.

use crate::core::constants::{FAVORITES_GROUP, OTHER_GROUP};
use crate::core::domain::Profile;

/// Case-insensitive substring search over name, account id, group, and tags.
///
/// An empty or whitespace-only query returns the input unchanged.
pub fn filter_by_query(profiles: &[Profile], query: &str) -> Vec<Profile> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return profiles.to_vec();
    }

    let matches = |field: &str| field.to_lowercase().contains(&query);

    profiles
        .iter()
        .filter(|p| {
            matches(&p.display_name)
                || matches(&p.account_id)
                || p.group.as_deref().is_some_and(matches)
                || p.tags.iter().any(|t| matches(t))
        })
        .cloned()
        .collect()
}

/// Group profiles for display.
///
/// Favorites come first under "Favorites" (only when there are any),
/// regardless of their own group. The rest follow in first-seen group order;
/// profiles without a group land in "Other". Labels are unique, so a
/// non-favorite grouped as "Favorites" joins the favorites bucket.
pub fn group_for_display(profiles: &[Profile]) -> Vec<(String, Vec<Profile>)> {
    let mut groups: Vec<(String, Vec<Profile>)> = Vec::new();

    let favorites: Vec<Profile> = profiles.iter().filter(|p| p.favorite).cloned().collect();
    if !favorites.is_empty() {
        groups.push((FAVORITES_GROUP.to_string(), favorites));
    }

    for profile in profiles.iter().filter(|p| !p.favorite) {
        let label = profile.group.as_deref().unwrap_or(OTHER_GROUP);
        match groups.iter_mut().find(|(name, _)| name == label) {
            Some((_, members)) => members.push(profile.clone()),
            None => groups.push((label.to_string(), vec![profile.clone()])),
        }
    }

    groups
}
