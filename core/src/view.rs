// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event-to-view materialization.
//!
//! Maps a snapshot of events onto the cells of a month, week or day view. Every timestamp is
//! compared in one reference time zone, and a cell includes an event whenever their closed
//! intervals overlap, so an event ending exactly at midnight still shows up on the next day.

mod day;
mod month;
mod week;

use std::{fmt, str::FromStr};

use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp, ToSpan};

use crate::datetime::{monday_of, start_of_day};
use crate::{Error, Event};

pub use day::{DayView, HourSlots, SlotAssignment, TimeMarker};
pub use month::{MonthCell, MonthView};
pub use week::{HourCell, WeekDay, WeekView};

/// Number of events shown in a month cell before collapsing into "+N more".
pub const DEFAULT_MONTH_CELL_CAP: usize = 3;

/// Number of parallel lanes per hour in the day view.
pub const DEFAULT_DAY_SLOTS: usize = 5;

/// Events starting this close to each other never share a day-view lane.
pub const DEFAULT_SLOT_PROXIMITY: SignedDuration = SignedDuration::from_mins(10);

/// The kind of view to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Every day of the reference month.
    Month,

    /// Seven days by 24 hours, starting on Monday.
    Week,

    /// The reference day, with all-day events and hour slots.
    Day,
}

const MODE_MONTH: &str = "month";
const MODE_WEEK: &str = "week";
const MODE_DAY: &str = "day";

impl ViewMode {
    /// Lowercase name of the mode, as used on the command line and in JSON.
    pub const fn name(self) -> &'static str {
        match self {
            ViewMode::Month => MODE_MONTH,
            ViewMode::Week => MODE_WEEK,
            ViewMode::Day => MODE_DAY,
        }
    }

    /// The reference date one period away in the given direction.
    pub fn step(self, reference: Date, direction: Direction, today: Date) -> Result<Date, Error> {
        let date = match (direction, self) {
            (Direction::Today, _) => today,
            (Direction::Previous, ViewMode::Month) => reference.checked_sub(1.month())?,
            (Direction::Previous, ViewMode::Week) => reference.checked_sub(7.days())?,
            (Direction::Previous, ViewMode::Day) => reference.yesterday()?,
            (Direction::Next, ViewMode::Month) => reference.checked_add(1.month())?,
            (Direction::Next, ViewMode::Week) => reference.checked_add(7.days())?,
            (Direction::Next, ViewMode::Day) => reference.tomorrow()?,
        };
        Ok(date)
    }

    /// The half-open range of instants a provider must cover to fill this view.
    pub fn window(self, reference: Date, tz: &TimeZone) -> Result<(Timestamp, Timestamp), Error> {
        let (first, next) = match self {
            ViewMode::Month => {
                let first = reference.first_of_month();
                (first, first.checked_add(1.month())?)
            }
            ViewMode::Week => {
                let monday = monday_of(reference)?;
                (monday, monday.checked_add(7.days())?)
            }
            ViewMode::Day => (reference, reference.tomorrow()?),
        };
        Ok((start_of_day(first, tz)?, start_of_day(next, tz)?))
    }
}

impl AsRef<str> for ViewMode {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            MODE_MONTH => Ok(ViewMode::Month),
            MODE_WEEK => Ok(ViewMode::Week),
            MODE_DAY => Ok(ViewMode::Day),
            _ => Err(format!("Unknown view mode: {value}")),
        }
    }
}

/// Navigation between periods of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One period back.
    Previous,

    /// One period forward.
    Next,

    /// The period containing today.
    Today,
}

/// Tunables of the materializer.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// The zone every timestamp is normalized to before comparison.
    pub time_zone: TimeZone,

    /// Visible events per month cell.
    pub month_cell_cap: usize,

    /// Lanes per hour in the day view, at least one.
    pub day_slots: usize,

    /// Minimum distance between the starts of two events sharing a lane.
    pub slot_proximity: SignedDuration,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            time_zone: TimeZone::UTC,
            month_cell_cap: DEFAULT_MONTH_CELL_CAP,
            day_slots: DEFAULT_DAY_SLOTS,
            slot_proximity: DEFAULT_SLOT_PROXIMITY,
        }
    }
}

/// The materialized view, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ViewModel {
    /// A month grid.
    Month(MonthView),

    /// A week grid.
    Week(WeekView),

    /// A single day.
    Day(DayView),
}

impl ViewModel {
    /// The mode this view was built for.
    pub fn mode(&self) -> ViewMode {
        match self {
            ViewModel::Month(_) => ViewMode::Month,
            ViewModel::Week(_) => ViewMode::Week,
            ViewModel::Day(_) => ViewMode::Day,
        }
    }
}

/// Builds views from event snapshots.
///
/// The clock is injected so that the same inputs always produce the same view; it only feeds
/// the advisory current-time marker of the day view.
#[derive(Debug, Clone)]
pub struct Materializer {
    config: ViewConfig,
    now: Timestamp,
}

impl Materializer {
    /// Creates a materializer reading the current time from the system clock.
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            now: Timestamp::now(),
        }
    }

    /// Pins the current time.
    pub fn with_now(mut self, now: Timestamp) -> Self {
        self.now = now;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The reference date of an instant, in the configured zone.
    pub fn date_of(&self, instant: Timestamp) -> Date {
        instant.to_zoned(self.config.time_zone.clone()).date()
    }

    /// Materializes `events` into the view `mode` around `reference`.
    pub fn materialize(
        &self,
        events: &[Event],
        mode: ViewMode,
        reference: Timestamp,
    ) -> Result<ViewModel, Error> {
        let date = self.date_of(reference);
        tracing::debug!(%mode, %date, events = events.len(), "materializing view");
        let view = match mode {
            ViewMode::Month => ViewModel::Month(month::materialize(events, date, &self.config)?),
            ViewMode::Week => ViewModel::Week(week::materialize(events, date, &self.config)?),
            ViewMode::Day => {
                let today = self.date_of(self.now);
                let now = (today == date).then(|| self.now.to_zoned(self.config.time_zone.clone()));
                ViewModel::Day(day::materialize(events, date, &self.config, now)?)
            }
        };
        Ok(view)
    }
}

/// Materializes `events` with the default configuration.
pub fn materialize(
    events: &[Event],
    mode: ViewMode,
    reference: Timestamp,
) -> Result<ViewModel, Error> {
    Materializer::new(ViewConfig::default()).materialize(events, mode, reference)
}

/// An event's span as civil date-times in the reference zone.
#[derive(Debug, Clone, Copy)]
struct LocalSpan {
    start: DateTime,
    end: DateTime,
    all_day: bool,
}

impl LocalSpan {
    fn of(event: &Event, tz: &TimeZone) -> Self {
        Self {
            start: event.start_in(tz).datetime(),
            end: event.end_in(tz).datetime(),
            all_day: event.is_all_day_in(tz),
        }
    }

    /// Whether `[start, end]` touches any instant of `date`.
    fn covers(&self, date: Date) -> bool {
        self.start.date() <= date && date <= self.end.date()
    }

    /// Whether `[start, end]` touches any day of `first..=last`.
    fn intersects(&self, first: Date, last: Date) -> bool {
        self.start.date() <= last && first <= self.end.date()
    }

    /// The first hour occupied on `date`, 0 when the event began on an earlier day.
    fn first_hour(&self, date: Date) -> i8 {
        if self.start.date() < date {
            0
        } else {
            self.start.hour()
        }
    }

    /// The last hour occupied on `date`, 23 when the event continues past it.
    fn last_hour(&self, date: Date) -> i8 {
        if self.end.date() > date {
            23
        } else {
            self.end.hour()
        }
    }
}

/// All-day events by `(title, start)`, then timed events by start.
fn order_day_events(events: &mut [(&Event, LocalSpan)]) {
    events.sort_by(|(a, sa), (b, sb)| {
        sb.all_day.cmp(&sa.all_day).then_with(|| {
            if sa.all_day {
                a.title()
                    .cmp(b.title())
                    .then_with(|| a.start().cmp(&b.start()))
            } else {
                a.start().cmp(&b.start())
            }
        })
    });
}
