// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use colored::{Color, Colorize};

/// Color theme of the terminal output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Colors that read well on a light background.
    #[default]
    Light,

    /// Brighter colors for a dark background.
    Dark,

    /// No colors at all.
    Plain,
}

/// What a piece of text means, so the theme can decide how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Header,
    Today,
    AllDay,
    Overflow,
    More,
    NowMarker,
    Muted,
}

impl Theme {
    pub fn paint(self, role: Role, text: &str) -> String {
        let Some(color) = self.color(role) else {
            return text.to_string();
        };

        let styled = text.color(color);
        match role {
            Role::Header | Role::Today | Role::NowMarker => styled.bold().to_string(),
            _ => styled.to_string(),
        }
    }

    fn color(self, role: Role) -> Option<Color> {
        match (self, role) {
            (Theme::Plain, _) => None,

            (Theme::Light, Role::Header) => Some(Color::Blue),
            (Theme::Light, Role::Today) => Some(Color::Green),
            (Theme::Light, Role::AllDay) => Some(Color::Magenta),
            (Theme::Light, Role::Overflow) => Some(Color::Red),
            (Theme::Light, Role::More) => Some(Color::Yellow),
            (Theme::Light, Role::NowMarker) => Some(Color::Red),
            (Theme::Light, Role::Muted) => Some(Color::BrightBlack),

            (Theme::Dark, Role::Header) => Some(Color::BrightCyan),
            (Theme::Dark, Role::Today) => Some(Color::BrightGreen),
            (Theme::Dark, Role::AllDay) => Some(Color::BrightMagenta),
            (Theme::Dark, Role::Overflow) => Some(Color::BrightRed),
            (Theme::Dark, Role::More) => Some(Color::BrightYellow),
            (Theme::Dark, Role::NowMarker) => Some(Color::BrightRed),
            (Theme::Dark, Role::Muted) => Some(Color::White),
        }
    }
}
