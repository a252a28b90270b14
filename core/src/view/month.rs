// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::Date;

use crate::view::{LocalSpan, ViewConfig, order_day_events};
use crate::{Error, Event};

/// Every day of one calendar month.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MonthView {
    /// The year of the month.
    pub year: i16,

    /// The month, 1 to 12.
    pub month: i8,

    /// Empty grid columns before the first day, with weeks starting on Monday.
    pub leading_blanks: usize,

    /// One cell per day, in date order.
    pub cells: Vec<MonthCell>,
}

impl MonthView {
    /// The cell of the given date, if it belongs to this month.
    pub fn cell(&self, date: Date) -> Option<&MonthCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }

    /// Whether no day of the month has any event.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.events.is_empty())
    }
}

/// The events of one day in a month view.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MonthCell {
    /// The day.
    pub date: Date,

    /// All-day events by `(title, start)`, followed by timed events by start.
    pub events: Vec<Event>,

    /// How many leading entries of `events` are all-day events.
    pub all_day_count: usize,

    /// How many leading entries of `events` fit in the cell.
    pub visible_count: usize,
}

impl MonthCell {
    /// The events drawn in the cell.
    pub fn visible(&self) -> &[Event] {
        &self.events[..self.visible_count]
    }

    /// Number of events hidden behind the overflow affordance.
    pub fn remaining(&self) -> usize {
        self.events.len() - self.visible_count
    }

    /// Whether the cell holds more events than it can show.
    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }

    /// The all-day events of the day.
    pub fn all_day(&self) -> &[Event] {
        &self.events[..self.all_day_count]
    }

    /// The timed events of the day.
    pub fn timed(&self) -> &[Event] {
        &self.events[self.all_day_count..]
    }
}

pub(super) fn materialize(
    events: &[Event],
    reference: Date,
    config: &ViewConfig,
) -> Result<MonthView, Error> {
    let first = reference.first_of_month();
    let last = reference.last_of_month();

    let candidates: Vec<_> = events
        .iter()
        .map(|event| (event, LocalSpan::of(event, &config.time_zone)))
        .filter(|(_, span)| span.intersects(first, last))
        .collect();

    let days = usize::try_from(first.days_in_month()).unwrap_or_default();
    let mut cells = Vec::with_capacity(days);
    for date in first.series(1.day()).take(days) {
        let mut todays: Vec<_> = candidates
            .iter()
            .filter(|(_, span)| span.covers(date))
            .copied()
            .collect();
        order_day_events(&mut todays);

        let all_day_count = todays.iter().filter(|(_, span)| span.all_day).count();
        let visible_count = todays.len().min(config.month_cell_cap);
        cells.push(MonthCell {
            date,
            events: todays.into_iter().map(|(event, _)| event.clone()).collect(),
            all_day_count,
            visible_count,
        });
    }

    Ok(MonthView {
        year: first.year(),
        month: first.month(),
        leading_blanks: usize::try_from(first.weekday().to_monday_zero_offset())
            .unwrap_or_default(),
        cells,
    })
}
