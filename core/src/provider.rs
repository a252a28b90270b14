// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The boundary to the calendar provider.
//!
//! Provider records arrive in the provider's own shape and are validated into [`Event`]s here.
//! A broken record is logged and skipped so that one bad event never hides the rest.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use tokio::fs;

use crate::datetime::start_of_day;
use crate::{Error, Event, EventDraft};

/// An event record as the provider serializes it.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderEvent {
    pub id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub color_id: Option<String>,
    pub start: Option<ProviderTime>,
    pub end: Option<ProviderTime>,

    /// Recurrence lines such as `RRULE:FREQ=WEEKLY`, joined into one opaque rule.
    pub recurrence: Option<Vec<String>>,
}

/// The start or end of a provider record: an instant, or a whole date for all-day events.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderTime {
    /// RFC 3339 instant with offset.
    pub date_time: Option<String>,

    /// Calendar date, `YYYY-MM-DD`.
    pub date: Option<String>,
}

enum Boundary {
    Instant(Timestamp),
    Date(Date),
}

impl ProviderTime {
    fn boundary(&self) -> Result<Option<Boundary>, Error> {
        if let Some(s) = &self.date_time {
            Ok(Some(Boundary::Instant(s.parse()?)))
        } else if let Some(s) = &self.date {
            Ok(Some(Boundary::Date(s.parse()?)))
        } else {
            Ok(None)
        }
    }
}

impl ProviderEvent {
    /// Converts the record into an unvalidated draft.
    ///
    /// Date-only boundaries are resolved in `tz`: the start becomes midnight and the exclusive
    /// end date becomes 23:59:59 of the previous day, so the event is classified all-day.
    pub fn to_draft(&self, tz: &TimeZone) -> Result<EventDraft, Error> {
        let start = self.start.as_ref().map(ProviderTime::boundary).transpose()?.flatten();
        let end = self.end.as_ref().map(ProviderTime::boundary).transpose()?.flatten();

        let start_date = match &start {
            Some(Boundary::Date(date)) => Some(*date),
            _ => None,
        };
        let start = match start {
            Some(Boundary::Instant(ts)) => Some(ts),
            Some(Boundary::Date(date)) => Some(start_of_day(date, tz)?),
            None => None,
        };
        let end = match end {
            Some(Boundary::Instant(ts)) => Some(ts),
            Some(Boundary::Date(date)) => {
                let last = date.yesterday()?;
                let last = start_date.map_or(last, |first| last.max(first));
                let end = last.at(23, 59, 59, 0).to_zoned(tz.clone())?;
                Some(end.timestamp())
            }
            None => None,
        };

        Ok(EventDraft {
            id: self.id.clone(),
            title: self.summary.clone(),
            description: self.description.clone(),
            color_tag: self.color_id.clone(),
            start,
            end,
            recurrence_rule: self
                .recurrence
                .as_ref()
                .filter(|lines| !lines.is_empty())
                .map(|lines| lines.join("\n")),
        })
    }

    /// Validates the record into an event.
    pub fn to_event(&self, tz: &TimeZone) -> Result<Event, Error> {
        self.to_draft(tz)?.try_into()
    }
}

/// Converts provider records, skipping and logging the ones that are malformed.
pub fn collect_events(records: &[ProviderEvent], tz: &TimeZone) -> Vec<Event> {
    records
        .iter()
        .filter_map(|record| match record.to_event(tz) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!(id = ?record.id, error = %e, "skipping malformed event");
                None
            }
        })
        .collect()
}

/// A source of calendar events.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Every event the source knows about.
    async fn fetch_all(&self) -> Result<Vec<Event>, Error>;

    /// Events overlapping `[start, end)`, ascending by start.
    async fn fetch(&self, start: Timestamp, end: Timestamp) -> Result<Vec<Event>, Error> {
        let mut events: Vec<_> = self
            .fetch_all()
            .await?
            .into_iter()
            .filter(|e| e.start() < end && e.end() >= start)
            .collect();
        events.sort_by_key(Event::start);
        Ok(events)
    }
}

/// Reads provider records from a JSON file, either a bare array or a `{ "items": [...] }` feed.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    time_zone: TimeZone,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Feed {
    List(Vec<ProviderEvent>),
    Items { items: Vec<ProviderEvent> },
}

impl JsonFileSource {
    /// Creates a source reading `path`, resolving date-only records in `time_zone`.
    pub fn new(path: impl Into<PathBuf>, time_zone: TimeZone) -> Self {
        Self {
            path: path.into(),
            time_zone,
        }
    }

    /// The file being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the records of a feed document.
    pub fn parse(content: &str) -> Result<Vec<ProviderEvent>, Error> {
        let records = match serde_json::from_str(content)? {
            Feed::List(records) | Feed::Items { items: records } => records,
        };
        Ok(records)
    }
}

#[async_trait]
impl EventSource for JsonFileSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_all(&self) -> Result<Vec<Event>, Error> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|source| Error::Io {
                path: self.path.clone(),
                source,
            })?;

        let records = Self::parse(&content)?;
        let mut events = collect_events(&records, &self.time_zone);
        events.sort_by_key(Event::start);
        tracing::debug!(records = records.len(), events = events.len(), "loaded events");
        Ok(events)
    }
}

/// An in-memory snapshot of events.
#[derive(Debug, Clone, Default)]
pub struct MemorySource(pub Vec<Event>);

#[async_trait]
impl EventSource for MemorySource {
    async fn fetch_all(&self) -> Result<Vec<Event>, Error> {
        Ok(self.0.clone())
    }
}
