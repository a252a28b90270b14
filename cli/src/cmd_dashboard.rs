// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calview_core::{Calview, ViewMode, ViewModel};
use clap::{ArgMatches, Command};

use crate::config::Config;
use crate::render::Renderer;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show today and the month around it")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    /// Show the dashboard with today's schedule and the month grid.
    pub async fn run(self, app: &Calview, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");
        print!("{}", self.render(app, config).await?);
        Ok(())
    }

    pub async fn render(&self, app: &Calview, config: &Config) -> Result<String, Box<dyn Error>> {
        let today = app.today();
        let renderer = Renderer::new(config.theme, app.view_config().time_zone.clone(), today);

        let mut out = String::new();
        if let ViewModel::Day(day) = app.view(ViewMode::Day, today).await? {
            out.push_str(&renderer.day(&day));
        }
        out.push('\n');
        if let ViewModel::Month(month) = app.view(ViewMode::Month, today).await? {
            out.push_str(&renderer.month(&month));
        }
        Ok(out)
    }
}
