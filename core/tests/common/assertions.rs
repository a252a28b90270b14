// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use calview_core::Event;

/// Asserts that the events carry exactly the given titles, in order.
pub fn assert_titles(events: &[Event], expected: &[&str]) {
    let titles: Vec<_> = events.iter().map(Event::title).collect();
    assert_eq!(titles, expected, "Event titles mismatch");
}

/// Asserts that the events are in ascending start order.
#[allow(dead_code)]
pub fn assert_sorted_by_start(events: &[Event]) {
    assert!(
        events.windows(2).all(|w| w[0].start() <= w[1].start()),
        "Events are not sorted by start"
    );
}
