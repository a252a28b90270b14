// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Search ranking workflow tests.

use calview_core::{MatchRank, match_type, search};

use crate::common::{assert_sorted_by_start, timed_event};

#[test]
fn exact_substring_and_no_match() {
    let events = vec![timed_event(
        "Standup Meeting",
        "2024-03-01T09:00:00Z",
        "2024-03-01T09:15:00Z",
    )];

    let exact = search(&events, "standup");
    assert_eq!(exact[0].title_match, MatchRank::Exact);

    let partial = search(&events, "stand");
    assert_eq!(partial[0].title_match, MatchRank::Substring);

    assert!(search(&events, "xyz").is_empty());
    assert_eq!(match_type("Standup Meeting", "xyz"), MatchRank::None);
}

#[test]
fn identical_events_form_one_group() {
    let events = vec![
        timed_event("Gym", "2024-03-08T07:00:00Z", "2024-03-08T08:00:00Z"),
        timed_event("Gym", "2024-03-01T07:00:00Z", "2024-03-01T08:00:00Z"),
        timed_event("Gym", "2024-03-04T07:00:00Z", "2024-03-04T08:00:00Z"),
    ];

    let results = search(&events, "gym");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Gym");
    assert_eq!(results[0].description, "");
    assert_eq!(results[0].count, 3);
    assert_sorted_by_start(&results[0].events);
}

#[test]
fn exact_titles_rank_first_then_alphabetical() {
    // "Pineapple" only matches as a substring, the other two as whole words
    let events = vec![
        timed_event("Pineapple", "2024-03-01T07:00:00Z", "2024-03-01T08:00:00Z"),
        timed_event("cherry apple", "2024-03-01T09:00:00Z", "2024-03-01T10:00:00Z"),
        timed_event("Banana apple", "2024-03-01T11:00:00Z", "2024-03-01T12:00:00Z"),
    ];

    let results = search(&events, "apple");
    let titles: Vec<_> = results.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["Banana apple", "cherry apple", "Pineapple"]);
    assert_eq!(
        results.iter().map(|g| g.title_match).collect::<Vec<_>>(),
        [MatchRank::Exact, MatchRank::Exact, MatchRank::Substring]
    );
}

#[test]
fn search_is_idempotent() {
    let events = vec![
        timed_event("Design review", "2024-03-01T09:00:00Z", "2024-03-01T10:00:00Z")
            .with_description("review the new layout"),
        timed_event("Code review", "2024-03-02T09:00:00Z", "2024-03-02T10:00:00Z"),
        timed_event("Reviewers sync", "2024-03-03T09:00:00Z", "2024-03-03T10:00:00Z"),
    ];

    let first = search(&events, "review");
    let second = search(&events, "review");
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    // the description match breaks the tie between the two exact titles
    assert_eq!(first[0].title, "Design review");
    assert_eq!(first[1].title, "Code review");
    assert_eq!(first[2].title, "Reviewers sync");
}

#[test]
fn results_serialize_for_presentation() {
    let events = vec![timed_event(
        "Gym",
        "2024-03-01T07:00:00Z",
        "2024-03-01T08:00:00Z",
    )];
    let json = serde_json::to_value(search(&events, "gym")).unwrap();
    assert_eq!(json[0]["title_match"], "exact");
    assert_eq!(json[0]["description_match"], "none");
    assert_eq!(json[0]["count"], 1);
}
