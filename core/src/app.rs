// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use jiff::civil::Date;
use jiff::{Timestamp, Zoned};

use crate::view::{Direction, Materializer, ViewConfig, ViewMode, ViewModel};
use crate::{Config, Error, Event, EventSource, SearchResultGroup, search};

/// Calview application core.
#[derive(Clone)]
pub struct Calview {
    now: Timestamp,
    materializer: Materializer,
    source: Arc<dyn EventSource>,
}

impl Calview {
    /// Creates a new instance with the given configuration.
    pub fn new(mut config: Config) -> Result<Self, Error> {
        config.normalize()?;
        let source = config.event_source()?;
        tracing::debug!(path = %source.path().display(), "using event file");
        Ok(Self::with_source(config.view_config()?, Arc::new(source)))
    }

    /// Creates an instance over an arbitrary event source.
    pub fn with_source(view_config: ViewConfig, source: Arc<dyn EventSource>) -> Self {
        let now = Timestamp::now();
        Self {
            now,
            materializer: Materializer::new(view_config).with_now(now),
            source,
        }
    }

    /// Pins the current time.
    pub fn with_now(mut self, now: Timestamp) -> Self {
        self.now = now;
        self.materializer = self.materializer.with_now(now);
        self
    }

    /// The current time in the instance.
    pub fn now(&self) -> Zoned {
        self.now.to_zoned(self.view_config().time_zone.clone())
    }

    /// Today in the reference time zone.
    pub fn today(&self) -> Date {
        self.now().date()
    }

    /// The materializer settings.
    pub fn view_config(&self) -> &ViewConfig {
        self.materializer.config()
    }

    /// The reference date one period away from `reference`.
    pub fn navigate(
        &self,
        mode: ViewMode,
        reference: Date,
        direction: Direction,
    ) -> Result<Date, Error> {
        mode.step(reference, direction, self.today())
    }

    /// Fetches the events of the period around `reference` and materializes them.
    pub async fn view(&self, mode: ViewMode, reference: Date) -> Result<ViewModel, Error> {
        let tz = &self.view_config().time_zone;
        let (start, end) = mode.window(reference, tz)?;
        let events = self.source.fetch(start, end).await?;
        tracing::debug!(%mode, %reference, events = events.len(), "fetched events for view");

        let instant = reference.to_zoned(tz.clone())?.timestamp();
        self.materializer.materialize(&events, mode, instant)
    }

    /// All events of the source.
    pub async fn events(&self) -> Result<Vec<Event>, Error> {
        self.source.fetch_all().await
    }

    /// Searches every event of the source.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResultGroup>, Error> {
        let events = self.events().await?;
        Ok(search(&events, query.trim()))
    }
}

impl std::fmt::Debug for Calview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calview")
            .field("now", &self.now)
            .field("materializer", &self.materializer)
            .finish_non_exhaustive()
    }
}
