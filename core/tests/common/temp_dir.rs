// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;
use tokio::fs;

/// Temporary directories used for testing, removed when dropped.
#[derive(Debug)]
pub struct TempDirs {
    /// Directory for provider event files.
    pub events_dir: PathBuf,

    /// Directory for configuration files.
    pub config_dir: PathBuf,

    _base: TempDir,
}

impl TempDirs {
    /// Creates new temporary directories for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let base = tempfile::tempdir()?;

        let events_dir = base.path().join("events");
        let config_dir = base.path().join("config");
        fs::create_dir_all(&events_dir).await?;
        fs::create_dir_all(&config_dir).await?;

        Ok(Self {
            events_dir,
            config_dir,
            _base: base,
        })
    }

    /// Writes a provider event file in the events directory.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub async fn create_events_file(
        &self,
        name: &str,
        content: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.events_dir.join(name);
        fs::write(&path, content).await?;
        Ok(path)
    }
}

/// Sets up temporary directories for integration tests.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub async fn setup_temp_dirs() -> Result<TempDirs, Box<dyn std::error::Error>> {
    TempDirs::new().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn temp_dirs_creates_directories() {
        let dirs = TempDirs::new().await.unwrap();
        assert!(dirs.events_dir.is_dir());
        assert!(dirs.config_dir.is_dir());
    }

    #[tokio::test]
    async fn temp_dirs_cleanup_on_drop() {
        let events_dir = {
            let dirs = TempDirs::new().await.unwrap();
            dirs.events_dir.clone()
        };
        assert!(!events_dir.exists());
    }
}
