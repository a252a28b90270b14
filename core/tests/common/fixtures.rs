// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::{Path, PathBuf};

use calview_core::{Config, ConfigDuration, Event};
use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};

/// Parses an RFC 3339 instant.
#[must_use]
pub fn ts(s: &str) -> Timestamp {
    s.parse().expect("valid timestamp")
}

/// Creates a timed event between two RFC 3339 instants.
#[must_use]
pub fn timed_event(title: &str, start: &str, end: &str) -> Event {
    Event::new(title, ts(start), ts(end)).expect("valid event")
}

/// Creates a UTC all-day event covering `first..=last`.
#[must_use]
pub fn all_day_event(title: &str, first: Date, last: Date) -> Event {
    let start = first.at(0, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap().timestamp();
    let end = last.at(23, 59, 59, 0).to_zoned(TimeZone::UTC).unwrap().timestamp();
    Event::new(title, start, end).expect("valid event")
}

/// A provider record with `dateTime` boundaries, as JSON.
#[must_use]
pub fn provider_record(summary: &str, start: &str, end: &str) -> String {
    format!(
        r#"{{"summary": "{summary}", "start": {{"dateTime": "{start}"}}, "end": {{"dateTime": "{end}"}}}}"#
    )
}

/// A provider feed document wrapping the given records.
#[must_use]
pub fn provider_feed(records: &[String]) -> String {
    format!(r#"{{"kind": "calendar#events", "items": [{}]}}"#, records.join(","))
}

/// Builder for creating test configurations.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new(&path).with_day_slots(3).build();
/// ```
#[must_use]
#[allow(dead_code)]
pub struct TestConfigBuilder {
    events_path: PathBuf,
    time_zone: Option<String>,
    month_cell_cap: Option<usize>,
    day_slots: Option<usize>,
    slot_proximity: Option<SignedDuration>,
}

#[allow(dead_code)]
impl TestConfigBuilder {
    /// Creates a new builder reading events from `events_path`.
    pub fn new(events_path: &Path) -> Self {
        Self {
            events_path: events_path.to_path_buf(),
            time_zone: None,
            month_cell_cap: None,
            day_slots: None,
            slot_proximity: None,
        }
    }

    /// Sets the reference time zone.
    pub fn with_time_zone(mut self, tz: &str) -> Self {
        self.time_zone = Some(tz.to_string());
        self
    }

    /// Sets the month cell cap.
    pub fn with_month_cell_cap(mut self, cap: usize) -> Self {
        self.month_cell_cap = Some(cap);
        self
    }

    /// Sets the lanes per hour of the day view.
    pub fn with_day_slots(mut self, slots: usize) -> Self {
        self.day_slots = Some(slots);
        self
    }

    /// Sets the lane proximity of the day view.
    pub fn with_slot_proximity(mut self, proximity: SignedDuration) -> Self {
        self.slot_proximity = Some(proximity);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Config {
        let mut config = Config::new(self.events_path);
        config.time_zone = self.time_zone;
        config.month_cell_cap = self.month_cell_cap;
        config.day_slots = self.day_slots;
        config.slot_proximity = self.slot_proximity.map(ConfigDuration);
        config
    }
}
