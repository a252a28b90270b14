// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use calview_core::{Calview, DateAnchor, Direction, ViewMode, ViewModel};
use clap::{ArgMatches, Command, arg};

use crate::config::Config;
use crate::render::Renderer;
use crate::util::{OutputFormat, arg_date, get_date};

/// Show one month, week or day of the calendar.
#[derive(Debug, Clone)]
pub struct CmdView {
    pub mode: ViewMode,
    pub date: DateAnchor,
    pub shift: Option<Direction>,
    pub output_format: OutputFormat,
}

impl CmdView {
    /// The subcommand is named after the mode, e.g. `month`.
    pub fn command(mode: ViewMode) -> Command {
        let (alias, about) = match mode {
            ViewMode::Month => ("m", "Show the month grid"),
            ViewMode::Week => ("w", "Show the week by hour"),
            ViewMode::Day => ("d", "Show the day with its hour lanes"),
        };

        Command::new(mode.name())
            .alias(alias)
            .about(about)
            .arg(arg_date())
            .arg(arg!(-p --prev "Show the period before the date").conflicts_with("next"))
            .arg(arg!(-n --next "Show the period after the date"))
            .arg(OutputFormat::arg())
    }

    pub fn from(mode: ViewMode, matches: &ArgMatches) -> Self {
        let shift = if matches.get_flag("prev") {
            Some(Direction::Previous)
        } else if matches.get_flag("next") {
            Some(Direction::Next)
        } else {
            None
        };

        Self {
            mode,
            date: get_date(matches),
            shift,
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &Calview, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering view...");
        print!("{}", self.render(app, config).await?);
        Ok(())
    }

    /// Materialize the view and turn it into text in the requested format.
    pub async fn render(&self, app: &Calview, config: &Config) -> Result<String, Box<dyn Error>> {
        let view = self.view(app).await?;
        match self.output_format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)? + "\n"),
            OutputFormat::Table => {
                let tz = app.view_config().time_zone.clone();
                let renderer = Renderer::new(config.theme, tz, app.today());
                Ok(match &view {
                    ViewModel::Month(month) => renderer.month(month),
                    ViewModel::Week(week) => renderer.week(week),
                    ViewModel::Day(day) => renderer.day(day),
                })
            }
        }
    }

    async fn view(&self, app: &Calview) -> Result<ViewModel, Box<dyn Error>> {
        let mut reference = self.date.resolve(app.today())?;
        if let Some(direction) = self.shift {
            reference = app.navigate(self.mode, reference, direction)?;
        }
        Ok(app.view(self.mode, reference).await?)
    }
}
