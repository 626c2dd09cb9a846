// SPDX-FileCopyrightText: 2026 SchedCC Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use schedcc_core::{APP_NAME, Config as CoreConfig, get_config_dir};
use tokio::fs;

const SCHEDCC_CONFIG_ENV: &str = "SCHEDCC_CONFIG";

/// Loads the configuration from `--config`, `$SCHEDCC_CONFIG` or the default
/// location, in that order. A missing default file yields the defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(SCHEDCC_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::info!(path = %config.display(), "no config found, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;
    Ok(raw.core)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn write_config(dir: &TempDir, name: &str, data_path: &str) -> PathBuf {
        let path = dir.path().join(name);
        let toml_content = format!(
            r#"
[core]
data_path = "{data_path}"
"#
        );
        fs::write(&path, toml_content).unwrap();
        path
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let cli_path = write_config(&temp_dir, "config.toml", "/srv/cli.json");
        let env_path = write_config(&temp_dir, "env_config.toml", "/srv/env.json");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::set_var(SCHEDCC_CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(Some(cli_path)).await.unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/cli.json")));

        unsafe {
            std::env::remove_var(SCHEDCC_CONFIG_ENV);
        }
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = write_config(&temp_dir, "env_config.toml", "/srv/env.json");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::set_var(SCHEDCC_CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/env.json")));

        unsafe {
            std::env::remove_var(SCHEDCC_CONFIG_ENV);
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn missing_default_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let _guard = env_lock().lock().await;
        let original_xdg = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::remove_var(SCHEDCC_CONFIG_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let config = parse_config(None).await.unwrap();
        assert!(config.data_path.is_none());
        assert!(config.export_dir.is_none());

        unsafe {
            match original_xdg {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }

    #[tokio::test]
    async fn missing_explicit_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");
        let err = parse_config(Some(path)).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn empty_config_has_default_core() {
        let raw: ConfigRaw = "".parse().unwrap();
        assert!(raw.core.data_path.is_none());
        assert_eq!(raw.core.date_format(), "%Y-%m-%d");
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!("[core]\ndata_path = 1".parse::<ConfigRaw>().is_err());
    }
}
