// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{Timestamp, Zoned, tz::TimeZone};

use crate::Error;

/// Title used when the provider supplies none.
pub const UNTITLED: &str = "(No title)";

/// A calendar event as handed over by the provider.
///
/// The core never mutates an event; every view or search result holds its own copy.
/// `start <= end` holds for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Event {
    id: Option<String>,
    title: String,
    description: Option<String>,
    color_tag: Option<String>,
    start: Timestamp,
    end: Timestamp,
    recurrence_rule: Option<String>,
}

impl Event {
    /// Creates an event with the given title and time span.
    pub fn new(title: impl Into<String>, start: Timestamp, end: Timestamp) -> Result<Self, Error> {
        EventDraft {
            title: Some(title.into()),
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
        .try_into()
    }

    /// Sets the description, an empty string is treated as no description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    /// Sets the provider identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the color tag.
    pub fn with_color_tag(mut self, color_tag: impl Into<String>) -> Self {
        self.color_tag = Some(color_tag.into());
        self
    }

    /// The provider identifier, `None` until the provider has persisted the event.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The display title, never empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The description of the event, if available.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Presentation hint, passed through untouched.
    pub fn color_tag(&self) -> Option<&str> {
        self.color_tag.as_deref()
    }

    /// The instant the event starts.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// The instant the event ends.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// The opaque recurrence rule. Occurrences are expected to be expanded already.
    pub fn recurrence_rule(&self) -> Option<&str> {
        self.recurrence_rule.as_deref()
    }

    /// The start in the given time zone.
    pub fn start_in(&self, tz: &TimeZone) -> Zoned {
        self.start.to_zoned(tz.clone())
    }

    /// The end in the given time zone.
    pub fn end_in(&self, tz: &TimeZone) -> Zoned {
        self.end.to_zoned(tz.clone())
    }

    /// Whether the event covers whole days, evaluated in UTC.
    pub fn is_all_day(&self) -> bool {
        self.is_all_day_in(&TimeZone::UTC)
    }

    /// Whether the event starts exactly at midnight and ends in the last minute of a day.
    pub fn is_all_day_in(&self, tz: &TimeZone) -> bool {
        let start = self.start_in(tz);
        let end = self.end_in(tz);
        start.hour() == 0
            && start.minute() == 0
            && start.second() == 0
            && start.subsec_nanosecond() == 0
            && end.hour() == 23
            && end.minute() == 59
    }

    /// Short label for view cells: `HH:MM - title`, or the bare title for all-day events.
    pub fn label(&self, tz: &TimeZone) -> String {
        if self.is_all_day_in(tz) {
            self.title.clone()
        } else {
            format!("{} - {}", self.start_in(tz).strftime("%H:%M"), self.title)
        }
    }
}

/// Unvalidated event data, as it arrives from a provider.
#[derive(Debug, Default, Clone)]
pub struct EventDraft {
    /// The provider identifier.
    pub id: Option<String>,

    /// The title, replaced by a placeholder when missing or blank.
    pub title: Option<String>,

    /// The description of the event.
    pub description: Option<String>,

    /// Presentation color tag.
    pub color_tag: Option<String>,

    /// The start instant, required.
    pub start: Option<Timestamp>,

    /// The end instant, required.
    pub end: Option<Timestamp>,

    /// Opaque recurrence rule.
    pub recurrence_rule: Option<String>,
}

impl TryFrom<EventDraft> for Event {
    type Error = Error;

    fn try_from(draft: EventDraft) -> Result<Self, Self::Error> {
        let title = match draft.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => UNTITLED.to_string(),
        };

        let invalid = |reason| Error::InvalidEvent {
            title: title.clone(),
            reason,
        };
        let start = draft.start.ok_or_else(|| invalid("missing start"))?;
        let end = draft.end.ok_or_else(|| invalid("missing end"))?;
        if start > end {
            return Err(invalid("start is after end"));
        }

        Ok(Self {
            id: draft.id,
            description: draft.description.filter(|a| !a.is_empty()),
            color_tag: draft.color_tag,
            start,
            end,
            recurrence_rule: draft.recurrence_rule,
            title,
        })
    }
}
