// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::path::{Path, PathBuf};

use jiff::SignedDuration;
use serde::de;

use crate::Error;
use crate::datetime::resolve_time_zone;
use crate::provider::JsonFileSource;
use crate::view::{DEFAULT_DAY_SLOTS, DEFAULT_MONTH_CELL_CAP, DEFAULT_SLOT_PROXIMITY, ViewConfig};

/// The name of the calview application.
pub const APP_NAME: &str = "calview";

/// Configuration for the calview core.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Path to the JSON file holding the provider's events.
    pub events_path: PathBuf,

    /// IANA name of the reference time zone, `local` for the system zone. Defaults to UTC.
    #[serde(default)]
    pub time_zone: Option<String>,

    /// Visible events per month cell.
    #[serde(default)]
    pub month_cell_cap: Option<usize>,

    /// Lanes per hour in the day view.
    #[serde(default)]
    pub day_slots: Option<usize>,

    /// Events starting closer than this never share a day-view lane.
    #[serde(default)]
    pub slot_proximity: Option<ConfigDuration>,
}

impl Config {
    /// Creates a configuration reading events from the given path, all else default.
    pub fn new(events_path: impl Into<PathBuf>) -> Self {
        Self {
            events_path: events_path.into(),
            time_zone: None,
            month_cell_cap: None,
            day_slots: None,
            slot_proximity: None,
        }
    }

    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Error> {
        self.events_path = expand_path(&self.events_path)
            .map_err(|e| Error::Config(format!("Failed to expand events path: {e}")))?;

        if self.day_slots == Some(0) {
            return Err(Error::Config("day_slots must be at least 1".to_string()));
        }
        if self.slot_proximity.is_some_and(|a| a.0.is_negative()) {
            return Err(Error::Config("slot_proximity must not be negative".into()));
        }
        Ok(())
    }

    /// The materializer settings described by this configuration.
    pub fn view_config(&self) -> Result<ViewConfig, Error> {
        Ok(ViewConfig {
            time_zone: resolve_time_zone(self.time_zone.as_deref())?,
            month_cell_cap: self.month_cell_cap.unwrap_or(DEFAULT_MONTH_CELL_CAP),
            day_slots: self.day_slots.unwrap_or(DEFAULT_DAY_SLOTS),
            slot_proximity: self
                .slot_proximity
                .map_or(DEFAULT_SLOT_PROXIMITY, |a| a.0),
        })
    }

    /// The event source described by this configuration.
    pub fn event_source(&self) -> Result<JsonFileSource, Error> {
        let tz = resolve_time_zone(self.time_zone.as_deref())?;
        Ok(JsonFileSource::new(&self.events_path, tz))
    }
}

/// A duration written as "HH:MM", "1d", "24h", "60m" or "1800s".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDuration(pub SignedDuration);

impl<'de> serde::Deserialize<'de> for ConfigDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DurationVisitor;

        impl de::Visitor<'_> for DurationVisitor {
            type Value = ConfigDuration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str(r#"a duration string like "HH:MM", "1d", "24h", "60m", or "1800s""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_duration(value)
                    .map(ConfigDuration)
                    .map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, String> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".to_string())
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, String> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".to_string())
}

/// Parse a duration string in the format "HH:MM" / "1d" / "24h" / "60m" / "1800s".
fn parse_duration(s: &str) -> Result<SignedDuration, String> {
    let int = |v: &str| {
        v.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid duration '{s}': {e}"))
    };

    // Try to parse "HH:MM" format
    if let Some((h, m)) = s.split_once(':') {
        Ok(SignedDuration::from_mins(int(h)? * 60 + int(m)?))
    }
    // Match suffix-based formats
    else if let Some(rest) = s.strip_suffix('d') {
        Ok(SignedDuration::from_hours(int(rest)? * 24))
    } else if let Some(rest) = s.strip_suffix('h') {
        Ok(SignedDuration::from_hours(int(rest)?))
    } else if let Some(rest) = s.strip_suffix('m') {
        Ok(SignedDuration::from_mins(int(rest)?))
    } else if let Some(rest) = s.strip_suffix('s') {
        Ok(SignedDuration::from_secs(int(rest)?))
    } else {
        Err(format!("Invalid duration format: {s}"))
    }
}
