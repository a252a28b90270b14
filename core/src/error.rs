// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Errors produced by the calview core.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Date arithmetic left the supported range, or a civil time could not be resolved.
    #[error("Date error: {0}")]
    Date(#[from] jiff::Error),

    /// An event record violates the event invariants.
    #[error("Invalid event '{title}': {reason}")]
    InvalidEvent {
        /// Title of the offending event, or the placeholder if it has none.
        title: String,

        /// What is wrong with it.
        reason: &'static str,
    },

    /// Unknown time zone name in the configuration.
    #[error("Unknown time zone '{name}': {source}")]
    TimeZone {
        /// The IANA name that failed to resolve.
        name: String,

        /// The underlying lookup error.
        source: jiff::Error,
    },

    /// Failed to read an event source.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path of the source.
        path: PathBuf,

        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The event source is not valid JSON.
    #[error("Failed to parse events: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}
