// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Background search workflow tests: the latest request wins.

use std::sync::Arc;

use calview_core::{SearchResultGroup, search_cancellable, task_slot};

use crate::common::timed_event;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn latest_search_is_the_only_result() {
    let events = Arc::new(vec![
        timed_event("Gym", "2024-03-01T07:00:00Z", "2024-03-01T08:00:00Z"),
        timed_event("Standup", "2024-03-01T09:00:00Z", "2024-03-01T09:15:00Z"),
    ]);

    let (mut slot, mut rx) = task_slot::<Vec<SearchResultGroup>>();
    for query in ["g", "gy", "stand"] {
        let events = events.clone();
        slot.submit(move |token| search_cancellable(&events, query, token));
    }

    let done = rx.recv().await.unwrap();
    assert_eq!(done.generation, 3);
    assert_eq!(done.value.len(), 1);
    assert_eq!(done.value[0].title, "Standup");

    drop(slot);
    assert!(rx.recv().await.is_none());
}
