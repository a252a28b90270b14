// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::Date;

use crate::datetime::monday_of;
use crate::view::{LocalSpan, ViewConfig};
use crate::{Error, Event};

/// Seven days by 24 hours, starting on Monday.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WeekView {
    /// The Monday of the week.
    pub start: Date,

    /// Monday through Sunday.
    pub days: Vec<WeekDay>,
}

impl WeekView {
    /// The events in the bucket of the given weekday (0 is Monday) and hour.
    pub fn cell(&self, day: usize, hour: i8) -> Option<&HourCell> {
        let hour = usize::try_from(hour).ok()?;
        self.days.get(day)?.hours.get(hour)
    }
}

/// One column of the week grid.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WeekDay {
    pub date: Date,

    /// Exactly 24 buckets, hour 0 first.
    pub hours: Vec<HourCell>,
}

/// Events stacked in one hour bucket, by start.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HourCell {
    pub hour: i8,
    pub events: Vec<Event>,
}

pub(super) fn materialize(
    events: &[Event],
    reference: Date,
    config: &ViewConfig,
) -> Result<WeekView, Error> {
    let monday = monday_of(reference)?;
    let sunday = monday.checked_add(6.days())?;

    let mut candidates: Vec<_> = events
        .iter()
        .map(|event| (event, LocalSpan::of(event, &config.time_zone)))
        .filter(|(_, span)| span.intersects(monday, sunday))
        .collect();
    candidates.sort_by_key(|(event, _)| event.start());

    let mut days = Vec::with_capacity(7);
    for date in monday.series(1.day()).take(7) {
        let mut hours: Vec<_> = (0..24)
            .map(|hour| HourCell {
                hour,
                events: Vec::new(),
            })
            .collect();

        for (event, span) in candidates.iter().filter(|(_, span)| span.covers(date)) {
            for hour in span.first_hour(date)..=span.last_hour(date) {
                hours[hour as usize].events.push((*event).clone());
            }
        }

        days.push(WeekDay { date, hours });
    }

    Ok(WeekView {
        start: monday,
        days,
    })
}
