// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{str::FromStr, sync::OnceLock};

use jiff::ToSpan;
use jiff::civil::Date;
use regex::Regex;

use crate::Error;

/// A reference date, either relative to today or a fixed calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateAnchor {
    /// A specific number of days in the future or past.
    InDays(i64),

    /// A specific date.
    Date(Date),
}

impl DateAnchor {
    /// Represents the current date.
    pub fn today() -> Self {
        DateAnchor::InDays(0)
    }

    /// Represents tomorrow, which is one day after today.
    pub fn tomorrow() -> Self {
        DateAnchor::InDays(1)
    }

    /// Represents yesterday, which is one day before today.
    pub fn yesterday() -> Self {
        DateAnchor::InDays(-1)
    }

    /// Resolves the anchor against the given current date.
    pub fn resolve(&self, today: Date) -> Result<Date, Error> {
        match self {
            DateAnchor::InDays(0) => Ok(today),
            DateAnchor::InDays(n) => Ok(today.checked_add((*n).days())?),
            DateAnchor::Date(date) => Ok(*date),
        }
    }
}

impl Default for DateAnchor {
    fn default() -> Self {
        Self::today()
    }
}

impl FromStr for DateAnchor {
    type Err = String;

    fn from_str(t: &str) -> Result<Self, Self::Err> {
        // Handle keywords
        match t.trim().to_lowercase().as_str() {
            "yesterday" => return Ok(Self::yesterday()),
            "tomorrow" => return Ok(Self::tomorrow()),
            "today" => return Ok(Self::today()),
            _ => {}
        }

        if let Ok(date) = t.trim().parse::<Date>() {
            Ok(Self::Date(date))
        } else if let Some(days) = parse_days(t) {
            // Parse as days (e.g., "10d", "in 10d", "in 10 days", "3 days ago")
            Ok(Self::InDays(days))
        } else {
            Err(format!("Invalid date format: {t}"))
        }
    }
}

/// Parse days from string formats like "10d", "in 10d", "in 10 days", "10 days ago"
fn parse_days(s: &str) -> Option<i64> {
    const RE: &str = r"(?i)^\s*(in\s*)?(\d+)\s*d(?:ays?)?\s*(ago)?\s*$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    let captures = re.captures(s)?;
    let num = captures[2].parse::<i64>().ok()?;
    match (captures.get(1), captures.get(3)) {
        (Some(_), Some(_)) => None, // "in 3 days ago"
        (_, Some(_)) => Some(-num),
        _ => Some(num),
    }
}
