//! Autocomplete handlers for Discord slash command parameters.
//!
//! The `/donate` command takes organizations as one comma-separated string, so the
//! suggestions complete the last entry and keep everything typed before it.

use crate::{bot::BotData, core::catalog, errors::Error};

/// Discord shows at most this many suggestions.
const MAX_SUGGESTIONS: usize = 25;
/// Discord rejects the whole response if any choice is longer than this.
pub const MAX_CHOICE_LENGTH: usize = 100;

/// Provides autocomplete suggestions for a comma-separated organization list.
///
/// # Arguments
/// * `_ctx` - The poise context (unused, but required by poise signature)
/// * `partial` - The partial string the user has typed so far
///
/// # Returns
/// Full option values: the already-typed organizations followed by each match
pub async fn autocomplete_organizations(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    complete_selection(partial)
}

/// Completes the last entry of a comma-separated organization list.
///
/// Organizations already listed earlier in `partial` are not suggested again. When the
/// full list would exceed [`MAX_CHOICE_LENGTH`], the bare organization name is suggested.
#[must_use]
pub fn complete_selection(partial: &str) -> Vec<String> {
    let (typed, current) = partial
        .rsplit_once(',')
        .map_or(("", partial), |(head, tail)| (head, tail));

    let chosen = catalog::parse_selection(typed);
    let prefix = if chosen.is_empty() {
        String::new()
    } else {
        format!("{}, ", chosen.join(", "))
    };
    let current_lower = current.trim().to_lowercase();

    catalog::all_organizations()
        .iter()
        .filter(|org| org.name.to_lowercase().contains(&current_lower))
        .filter(|org| !chosen.iter().any(|c| c.eq_ignore_ascii_case(org.name)))
        .map(|org| {
            let full = format!("{prefix}{}", org.name);
            if full.chars().count() > MAX_CHOICE_LENGTH {
                org.name.to_string()
            } else {
                full
            }
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}
