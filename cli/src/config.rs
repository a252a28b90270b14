// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use calview_core::{APP_NAME, Config as CoreConfig, get_config_dir};

use crate::theme::Theme;

const CALVIEW_CONFIG_ENV: &str = "CALVIEW_CONFIG";
const CALVIEW_DEV_ENV: &str = "CALVIEW_DEV";

const CALVIEW_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const CALVIEW_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CALVIEW_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({CALVIEW_DEV_ENV} is set): config must be explicitly specified via --config or {CALVIEW_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, a.ui))
}

/// Presentation settings of the command line interface.
#[derive(Debug, Default, Clone, Copy, serde::Deserialize)]
pub struct Config {
    /// Color theme, `light` when unset.
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    core: CoreConfig,

    #[serde(default)]
    ui: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(CALVIEW_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if CALVIEW_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if CALVIEW_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            CALVIEW_DEV_ENV,
            val,
            CALVIEW_DEV_VALID_TRUE.join(", "),
            CALVIEW_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
