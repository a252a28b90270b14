// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command line presentation of calview: month, week and day views, search, and a dashboard.

mod cli;
mod cmd_dashboard;
mod cmd_search;
mod cmd_view;
mod config;
mod render;
mod theme;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_dashboard::CmdDashboard;
pub use crate::cmd_search::{CmdSearch, search_lines};
pub use crate::cmd_view::CmdView;
pub use crate::config::Config;
pub use crate::render::Renderer;
pub use crate::theme::Theme;
pub use crate::util::OutputFormat;
