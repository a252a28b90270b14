// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;
use jiff::civil::Date;

use crate::view::{LocalSpan, ViewConfig, order_day_events};
use crate::{Error, Event};

/// A single day: an all-day header and 24 hours of lanes.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DayView {
    /// The reference day.
    pub date: Date,

    /// All-day events by `(title, start)`.
    pub all_day: Vec<Event>,

    /// Timed events in encounter order, with their lanes.
    pub timed: Vec<SlotAssignment>,

    /// Exactly 24 hours, hour 0 first.
    pub hours: Vec<HourSlots>,

    /// Position of the current time, present only when the day is today.
    pub now_marker: Option<TimeMarker>,
}

impl DayView {
    /// The assignments in the given hour, lane by lane.
    pub fn events_at(&self, hour: i8) -> Vec<&SlotAssignment> {
        let Some(hour) = usize::try_from(hour).ok().and_then(|h| self.hours.get(h)) else {
            return Vec::new();
        };
        hour.slots
            .iter()
            .flatten()
            .map(|&index| &self.timed[index])
            .collect()
    }
}

/// The lane of one timed event.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SlotAssignment {
    pub event: Event,

    /// Lane index, `0..day_slots`.
    pub slot: usize,

    /// First occupied hour of the day.
    pub start_hour: i8,

    /// Last occupied hour of the day, inclusive.
    pub end_hour: i8,

    /// No free lane was found and the event was appended to lane 0.
    pub overflow: bool,
}

impl SlotAssignment {
    /// Leftward offset of the lane for a cascading layout, `step` units per lane.
    pub fn indent(&self, step: usize) -> usize {
        self.slot * step
    }

    /// Whether the event occupies the given hour.
    pub fn spans(&self, hour: i8) -> bool {
        (self.start_hour..=self.end_hour).contains(&hour)
    }
}

/// The lanes of one hour. Each lane lists indices into [`DayView::timed`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HourSlots {
    pub hour: i8,
    pub slots: Vec<Vec<usize>>,
}

/// Current time on the day view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TimeMarker {
    pub hour: i8,
    pub minute: i8,
}

pub(super) fn materialize(
    events: &[Event],
    date: Date,
    config: &ViewConfig,
    now: Option<Zoned>,
) -> Result<DayView, Error> {
    let tz = &config.time_zone;
    let todays = events
        .iter()
        .map(|event| (event, LocalSpan::of(event, tz)))
        .filter(|(_, span)| span.covers(date));

    let (mut all_day, timed): (Vec<_>, Vec<_>) = todays.partition(|(_, span)| span.all_day);
    order_day_events(&mut all_day);

    let lanes = config.day_slots.max(1);
    let mut hours: Vec<_> = (0..24)
        .map(|hour| HourSlots {
            hour,
            slots: vec![Vec::new(); lanes],
        })
        .collect();

    let mut assignments: Vec<SlotAssignment> = Vec::with_capacity(timed.len());
    for (event, span) in timed {
        let (start_hour, end_hour) = (span.first_hour(date), span.last_hour(date));
        let range = usize::try_from(start_hour).unwrap_or(0)
            ..=usize::try_from(end_hour).unwrap_or(23);

        let near = |index: &usize| {
            let other = &assignments[*index].event;
            event.start().duration_since(other.start()).abs() <= config.slot_proximity
        };
        let free = (0..lanes).find(|&slot| {
            hours[range.clone()]
                .iter()
                .all(|hour| !hour.slots[slot].iter().any(&near))
        });

        if free.is_none() {
            tracing::debug!(title = event.title(), "no free lane, appending to lane 0");
        }
        let slot = free.unwrap_or(0);
        let index = assignments.len();
        for hour in &mut hours[range] {
            hour.slots[slot].push(index);
        }
        assignments.push(SlotAssignment {
            event: event.clone(),
            slot,
            start_hour,
            end_hour,
            overflow: free.is_none(),
        });
    }

    Ok(DayView {
        date,
        all_day: all_day.into_iter().map(|(e, _)| e.clone()).collect(),
        timed: assignments,
        hours,
        now_marker: now.map(|now| TimeMarker {
            hour: now.hour(),
            minute: now.minute(),
        }),
    })
}
