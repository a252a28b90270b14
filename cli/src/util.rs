// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calview_core::DateAnchor;
use clap::{Arg, ArgMatches, arg, value_parser};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

pub fn arg_date() -> Arg {
    arg!(-d --date <DATE> "Reference date of the view")
        .long_help(
            "\
Reference date of the view. Accepts YYYY-MM-DD, `today`, `tomorrow`, `yesterday`, \
or a relative offset such as `in 3d` and `3 days ago`.",
        )
        .value_parser(value_parser!(DateAnchor))
        .default_value("today")
}

pub fn get_date(matches: &ArgMatches) -> DateAnchor {
    matches.get_one("date").copied().unwrap_or_default()
}

/// Cut `text` to at most `width` columns, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `text` with spaces on the right up to `width` columns.
pub fn pad(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - w))
    }
}
