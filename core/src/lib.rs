// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of calview: turns a snapshot of calendar events into month, week and day views, and
//! searches them.

mod app;
mod config;
mod datetime;
mod error;
mod event;
mod provider;
mod search;
mod task;
pub mod view;

pub use crate::app::Calview;
pub use crate::config::{APP_NAME, Config, ConfigDuration, expand_path, get_config_dir};
pub use crate::datetime::{DateAnchor, end_of_day, monday_of, resolve_time_zone, start_of_day};
pub use crate::error::Error;
pub use crate::event::{Event, EventDraft, UNTITLED};
pub use crate::provider::{
    EventSource, JsonFileSource, MemorySource, ProviderEvent, ProviderTime, collect_events,
};
pub use crate::search::{MatchRank, SearchResultGroup, match_type, search, search_cancellable};
pub use crate::task::{CancelToken, Completed, TaskReceiver, TaskSlot, task_slot};
pub use crate::view::{Direction, Materializer, ViewConfig, ViewMode, ViewModel, materialize};
