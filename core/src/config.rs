// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::DATE_FORMAT;

/// The name of the application.
pub const APP_NAME: &str = "schedcc";

/// Configuration for the command center.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Path to a JSON dataset of events. The sample bookings are used if unset.
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Directory the CSV export is saved into. Defaults to the working directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// `strftime` format of dates in the results table.
    #[serde(default)]
    pub date_format: Option<String>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(path) = &self.data_path {
            self.data_path = Some(
                expand_path(path).map_err(|e| format!("Failed to expand data path: {e}"))?,
            );
        }

        if let Some(dir) = &self.export_dir {
            self.export_dir = Some(
                expand_path(dir)
                    .map_err(|e| format!("Failed to expand export directory path: {e}"))?,
            );
        }

        Ok(())
    }

    /// The date format of the results table.
    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DATE_FORMAT)
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

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

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or("User-specific config directory not found".into())
}
