// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Plain text rendering of view models and search results.

use std::fmt::Write;

use calview_core::SearchResultGroup;
use calview_core::view::{DayView, MonthCell, MonthView, WeekView};
use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::theme::{Role, Theme};
use crate::util::{pad, truncate};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_CELL_WIDTH: usize = 16;
const WEEK_CELL_WIDTH: usize = 14;
const DAY_INDENT_STEP: usize = 4;

/// Turns view models into terminal text.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    time_zone: TimeZone,
    today: Date,
}

impl Renderer {
    pub fn new(theme: Theme, time_zone: TimeZone, today: Date) -> Self {
        Self {
            theme,
            time_zone,
            today,
        }
    }

    fn paint(&self, role: Role, text: &str) -> String {
        self.theme.paint(role, text)
    }

    pub fn month(&self, view: &MonthView) -> String {
        let mut out = String::new();
        let title = view
            .cells
            .first()
            .map(|c| c.date.strftime("%B %Y").to_string())
            .unwrap_or_else(|| format!("{:04}-{:02}", view.year, view.month));
        let _ = writeln!(out, "{}", self.paint(Role::Header, &title));

        let header: Vec<_> = WEEKDAYS.iter().map(|d| pad(d, MONTH_CELL_WIDTH)).collect();
        let _ = writeln!(out, "{}", self.paint(Role::Muted, header.join(" ").trim_end()));

        let mut slots: Vec<Option<&MonthCell>> = vec![None; view.leading_blanks];
        slots.extend(view.cells.iter().map(Some));
        for week in slots.chunks(7) {
            let columns: Vec<Vec<String>> = week.iter().map(|c| self.month_cell(*c)).collect();
            let height = columns.iter().map(Vec::len).max().unwrap_or(0);
            for row in 0..height {
                let line: Vec<_> = (0..7)
                    .map(|i| {
                        let (text, role) = match columns.get(i).and_then(|c| c.get(row)) {
                            Some(text) => (text.as_str(), self.month_role(week.get(i), row)),
                            None => ("", None),
                        };
                        let padded = pad(text, MONTH_CELL_WIDTH);
                        match role {
                            Some(role) => self.paint(role, &padded),
                            None => padded,
                        }
                    })
                    .collect();
                let _ = writeln!(out, "{}", line.join(" ").trim_end());
            }
        }
        out
    }

    fn month_cell(&self, cell: Option<&MonthCell>) -> Vec<String> {
        let Some(cell) = cell else {
            return Vec::new();
        };

        let mut lines = vec![format!("{:>2}", cell.date.day())];
        for event in cell.visible() {
            lines.push(truncate(&event.label(&self.time_zone), MONTH_CELL_WIDTH));
        }
        if cell.has_more() {
            lines.push(format!("+{} more", cell.remaining()));
        }
        lines
    }

    fn month_role(&self, cell: Option<&Option<&MonthCell>>, row: usize) -> Option<Role> {
        let cell = cell.copied().flatten()?;
        if row == 0 {
            return (cell.date == self.today).then_some(Role::Today);
        }

        let index = row - 1;
        if index < cell.visible().len() {
            (index < cell.all_day_count).then_some(Role::AllDay)
        } else {
            Some(Role::More)
        }
    }

    pub fn week(&self, view: &WeekView) -> String {
        let mut out = String::new();
        let end = view.days.last().map_or(view.start, |d| d.date);
        let title = format!("Week of {} - {}", view.start, end);
        let _ = writeln!(out, "{}", self.paint(Role::Header, &title));

        let mut header = pad("", 6);
        for day in &view.days {
            let label = pad(&day.date.strftime("%a %m-%d").to_string(), WEEK_CELL_WIDTH);
            if day.date == self.today {
                header.push_str(&self.paint(Role::Today, &label));
            } else {
                header.push_str(&self.paint(Role::Muted, &label));
            }
            header.push(' ');
        }
        let _ = writeln!(out, "{}", header.trim_end());

        let mut printed = false;
        for hour in 0..24i8 {
            let cells: Vec<_> = (0..view.days.len())
                .map(|day| view.cell(day, hour).map_or(&[][..], |c| &c.events[..]))
                .collect();
            if cells.iter().all(|events| events.is_empty()) {
                continue;
            }

            printed = true;
            let mut line = format!("{hour:02}:00 ");
            for events in cells {
                let text = match events {
                    [] => String::new(),
                    [one] => truncate(one.title(), WEEK_CELL_WIDTH),
                    [first, rest @ ..] => {
                        let more = format!(" +{}", rest.len());
                        let width = WEEK_CELL_WIDTH.saturating_sub(more.len());
                        format!("{}{more}", truncate(first.title(), width))
                    }
                };
                line.push_str(&pad(&text, WEEK_CELL_WIDTH));
                line.push(' ');
            }
            let _ = writeln!(out, "{}", line.trim_end());
        }

        if !printed {
            let _ = writeln!(out, "{}", self.paint(Role::Muted, "No events this week"));
        }
        out
    }

    pub fn day(&self, view: &DayView) -> String {
        let mut out = String::new();
        let title = view.date.strftime("%A, %B %-d %Y").to_string();
        let role = if view.date == self.today {
            Role::Today
        } else {
            Role::Header
        };
        let _ = writeln!(out, "{}", self.paint(role, &title));

        for event in &view.all_day {
            let line = format!("all-day  {}", event.title());
            let _ = writeln!(out, "{}", self.paint(Role::AllDay, &line));
        }
        if view.timed.is_empty() && view.all_day.is_empty() {
            let _ = writeln!(out, "{}", self.paint(Role::Muted, "No events"));
        }

        for hour in 0..24i8 {
            let starting: Vec<_> = view
                .timed
                .iter()
                .filter(|a| a.start_hour == hour)
                .collect();
            let continuing: Vec<_> = view
                .timed
                .iter()
                .filter(|a| a.start_hour != hour && a.spans(hour))
                .collect();
            let marker = view.now_marker.filter(|m| m.hour == hour);
            if starting.is_empty() && continuing.is_empty() && marker.is_none() {
                continue;
            }

            let _ = writeln!(out, "{}", self.paint(Role::Muted, &format!("{hour:02}:00")));
            for a in &continuing {
                let indent = " ".repeat(a.indent(DAY_INDENT_STEP) + 2);
                let line = format!("{indent}┆ {}", a.event.title());
                let _ = writeln!(out, "{}", self.paint(Role::Muted, &line));
            }
            for a in &starting {
                let indent = " ".repeat(a.indent(DAY_INDENT_STEP) + 2);
                let label = a.event.label(&self.time_zone);
                if a.overflow {
                    let _ = writeln!(out, "{indent}{} {}", label, self.paint(Role::Overflow, "!"));
                } else {
                    let _ = writeln!(out, "{indent}{label}");
                }
            }
            if let Some(m) = marker {
                let line = format!("  ── now {:02}:{:02} ──", m.hour, m.minute);
                let _ = writeln!(out, "{}", self.paint(Role::NowMarker, &line));
            }
        }
        out
    }

    pub fn search(&self, groups: &[SearchResultGroup]) -> String {
        let mut out = String::new();
        if groups.is_empty() {
            let _ = writeln!(out, "{}", self.paint(Role::Muted, "No matching events"));
            return out;
        }

        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }

            let title = format!("{} ({})", group.title, group.count);
            let _ = writeln!(out, "{}", self.paint(Role::Header, &title));
            if !group.description.is_empty() {
                let first_line = group.description.lines().next().unwrap_or_default();
                let _ = writeln!(out, "  {}", self.paint(Role::Muted, first_line));
            }
            for event in &group.events {
                let start = event.start_in(&self.time_zone);
                let when = if event.is_all_day_in(&self.time_zone) {
                    start.strftime("%Y-%m-%d").to_string()
                } else {
                    start.strftime("%Y-%m-%d %H:%M").to_string()
                };
                let _ = writeln!(out, "  • {when}");
            }
        }
        out
    }
}
