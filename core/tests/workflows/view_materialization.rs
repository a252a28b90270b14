// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! View materialization workflow tests.

use calview_core::{Direction, Materializer, ViewConfig, ViewMode, ViewModel, materialize};
use jiff::SignedDuration;
use jiff::civil::date;
use jiff::tz::{self, TimeZone};

use crate::common::{all_day_event, assert_titles, timed_event, ts};

#[test]
fn month_membership_matches_date_range() {
    let events = vec![
        timed_event("Trip", "2024-03-09T18:00:00Z", "2024-03-12T08:00:00Z"),
        timed_event("Midnight", "2024-03-14T23:00:00Z", "2024-03-15T00:00:00Z"),
        all_day_event("Holiday", date(2024, 3, 20), date(2024, 3, 20)),
    ];
    let view = materialize(&events, ViewMode::Month, ts("2024-03-01T12:00:00Z")).unwrap();
    let ViewModel::Month(month) = view else {
        panic!("Expected month view");
    };

    for cell in &month.cells {
        for event in &events {
            let start = event.start_in(&TimeZone::UTC).date();
            let end = event.end_in(&TimeZone::UTC).date();
            let expected = start <= cell.date && cell.date <= end;
            assert_eq!(
                cell.events.contains(event),
                expected,
                "{} on {}",
                event.title(),
                cell.date
            );
        }
    }

    // an event ending exactly at midnight still belongs to the next day
    assert_titles(&month.cell(date(2024, 3, 15)).unwrap().events, &["Midnight"]);
}

#[test]
fn empty_snapshot_yields_well_formed_views() {
    let reference = ts("2024-02-15T00:00:00Z");
    for mode in [ViewMode::Month, ViewMode::Week, ViewMode::Day] {
        let view = materialize(&[], mode, reference).unwrap();
        assert_eq!(view.mode(), mode);
        match view {
            ViewModel::Month(month) => assert_eq!(month.cells.len(), 29),
            ViewModel::Week(week) => assert_eq!(week.days.len(), 7),
            ViewModel::Day(day) => assert_eq!(day.hours.len(), 24),
        }
    }
}

#[test]
fn month_overflow_shows_three_and_counts_the_rest() {
    let events: Vec<_> = (0..5)
        .map(|i| {
            timed_event(
                &format!("Meeting {i}"),
                &format!("2024-03-05T1{i}:00:00Z"),
                &format!("2024-03-05T1{i}:30:00Z"),
            )
        })
        .collect();
    let ViewModel::Month(month) =
        materialize(&events, ViewMode::Month, ts("2024-03-05T00:00:00Z")).unwrap()
    else {
        panic!("Expected month view");
    };
    let cell = month.cell(date(2024, 3, 5)).unwrap();
    assert_titles(cell.visible(), &["Meeting 0", "Meeting 1", "Meeting 2"]);
    assert_eq!(cell.remaining(), 2);
}

#[test]
fn day_view_near_events_use_distinct_lanes() {
    let events = vec![
        timed_event("Sync", "2024-03-14T10:00:00Z", "2024-03-14T12:00:00Z"),
        timed_event("Call", "2024-03-14T10:05:00Z", "2024-03-14T11:00:00Z"),
        timed_event("Lunch", "2024-03-14T12:30:00Z", "2024-03-14T13:00:00Z"),
    ];
    let ViewModel::Day(day) =
        materialize(&events, ViewMode::Day, ts("2024-03-14T08:00:00Z")).unwrap()
    else {
        panic!("Expected day view");
    };

    for a in &day.timed {
        for b in &day.timed {
            if a.event == b.event {
                continue;
            }
            let shared = (a.start_hour..=a.end_hour).any(|h| b.spans(h));
            let gap = a.event.start().duration_since(b.event.start()).abs();
            if shared && gap <= SignedDuration::from_mins(10) {
                assert_ne!(a.slot, b.slot, "{} and {}", a.event.title(), b.event.title());
            }
        }
    }
    assert_eq!(day.timed[2].slot, 0);
}

#[test]
fn navigation_moves_reference_and_window() {
    let materializer =
        Materializer::new(ViewConfig::default()).with_now(ts("2024-03-14T10:00:00Z"));
    let today = materializer.date_of(ts("2024-03-14T10:00:00Z"));

    let next = ViewMode::Month
        .step(date(2024, 3, 14), Direction::Next, today)
        .unwrap();
    let (start, end) = ViewMode::Month
        .window(next, &materializer.config().time_zone)
        .unwrap();
    assert_eq!(start, ts("2024-04-01T00:00:00Z"));
    assert_eq!(end, ts("2024-05-01T00:00:00Z"));

    let back = ViewMode::Week
        .step(date(2024, 3, 14), Direction::Previous, today)
        .unwrap();
    assert_eq!(back, date(2024, 3, 7));
}

#[test]
fn day_view_marker_follows_injected_clock() {
    let materializer =
        Materializer::new(ViewConfig::default()).with_now(ts("2024-03-14T16:20:00Z"));

    let ViewModel::Day(today) = materializer
        .materialize(&[], ViewMode::Day, ts("2024-03-14T00:00:00Z"))
        .unwrap()
    else {
        panic!("Expected day view");
    };
    let marker = today.now_marker.unwrap();
    assert_eq!((marker.hour, marker.minute), (16, 20));

    let ViewModel::Day(other) = materializer
        .materialize(&[], ViewMode::Day, ts("2024-03-15T00:00:00Z"))
        .unwrap()
    else {
        panic!("Expected day view");
    };
    assert!(other.now_marker.is_none());
}

#[test]
fn reference_zone_shifts_membership() {
    let event = timed_event("Late call", "2024-03-14T23:30:00Z", "2024-03-14T23:45:00Z");
    let config = ViewConfig {
        time_zone: TimeZone::fixed(tz::offset(2)),
        ..Default::default()
    };
    let materializer = Materializer::new(config);

    let ViewModel::Day(day) = materializer
        .materialize(&[event], ViewMode::Day, ts("2024-03-15T00:00:00Z"))
        .unwrap()
    else {
        panic!("Expected day view");
    };
    assert_eq!(day.date, date(2024, 3, 15));
    assert_eq!(day.timed.len(), 1);
    assert_eq!(day.timed[0].start_hour, 1);
}

#[test]
fn view_model_serializes_with_mode_tag() {
    let view = materialize(&[], ViewMode::Week, ts("2024-03-14T00:00:00Z")).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["mode"], "week");
    assert_eq!(json["start"], "2024-03-11");
}
