// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Free-text event search with grouped, ranked results.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::{CancelToken, Event};

/// How well a text matches a query. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRank {
    /// The query equals one of the words of the text.
    Exact = 0,

    /// The query appears inside the text, but not as a whole word.
    Substring = 1,

    /// No match.
    None = 2,
}

impl MatchRank {
    /// Whether this is a match at all.
    pub fn is_match(self) -> bool {
        self != MatchRank::None
    }
}

/// Classifies how `text` matches `query`, ignoring case.
pub fn match_type(text: &str, query: &str) -> MatchRank {
    const RE: &str = r"\b\w+\b";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let text = text.to_lowercase();
    let query = query.to_lowercase();
    if re.find_iter(&text).any(|word| word.as_str() == query) {
        MatchRank::Exact
    } else if text.contains(&query) {
        MatchRank::Substring
    } else {
        MatchRank::None
    }
}

/// Events sharing a title and description, found by one search.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchResultGroup {
    pub title: String,

    /// The shared description, empty when the events have none.
    pub description: String,

    /// Number of events in the group.
    pub count: usize,

    /// The events, ascending by start.
    pub events: Vec<Event>,

    pub title_match: MatchRank,
    pub description_match: MatchRank,
}

/// Searches `events` for `query` and returns the matching groups, best first.
///
/// An empty query matches nothing. Ties keep the order in which groups were first encountered.
pub fn search(events: &[Event], query: &str) -> Vec<SearchResultGroup> {
    search_cancellable(events, query, &CancelToken::new()).unwrap_or_default()
}

/// Like [`search`], but returns `None` as soon as `token` is cancelled.
pub fn search_cancellable(
    events: &[Event],
    query: &str,
    token: &CancelToken,
) -> Option<Vec<SearchResultGroup>> {
    if query.is_empty() {
        return Some(Vec::new());
    }

    let mut groups: Vec<SearchResultGroup> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    for event in events {
        if token.is_cancelled() {
            tracing::debug!(query, "search cancelled");
            return None;
        }

        let title = event.title();
        let description = event.description().unwrap_or_default();
        let title_match = match_type(title, query);
        let description_match = match_type(description, query);
        if title_match.min(description_match) == MatchRank::None {
            continue;
        }

        let i = *index.entry((title, description)).or_insert_with(|| {
            groups.push(SearchResultGroup {
                title: title.to_string(),
                description: description.to_string(),
                count: 0,
                events: Vec::new(),
                title_match,
                description_match,
            });
            groups.len() - 1
        });
        let group = &mut groups[i];
        group.title_match = group.title_match.min(title_match);
        group.description_match = group.description_match.min(description_match);
        group.events.push(event.clone());
    }

    for group in &mut groups {
        group.count = group.events.len();
        group.events.sort_by_key(Event::start);
    }
    groups.sort_by_cached_key(|g| (g.title_match, g.description_match, g.title.to_lowercase()));

    tracing::debug!(query, groups = groups.len(), "search finished");
    Some(groups)
}
