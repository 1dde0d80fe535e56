//! # unitconv Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for unitconv, handling
//! loading, merging, and validation. Configuration only shapes presentation
//! (decimal places, chat labels, history cap) and the HTTP front end; the
//! unit table itself is fixed.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` / `UNITCONV_CONFIG` (used alone)
//! 2. Project-specific `.unitconv.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/unitconv/config.toml`
//! 4. Default values defined in the code
//!
//! Command-line flags of the individual commands override whatever is loaded here.
//!
//! ## Examples
//!
//! ```toml
//! [display]
//! precision = 6
//!
//! [chat]
//! bot_label = "Converter"
//! max_history = 50
//!
//! [server]
//! host = "0.0.0.0"
//! port = 9000
//! enable_cors = false
//! ```
//!
use crate::core::error::{Result, UnitconvError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::IpAddr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Upper bound for `display.precision`; beyond this f64 output is noise.
pub const MAX_PRECISION: usize = 12;

const PROJECT_CONFIG_FILENAME: &str = ".unitconv.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub server: ServerSection,
}

/// Output formatting for the manual converter.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Decimal places of the converted value.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

/// Settings for the chatbot front ends.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Label printed in front of the user's messages.
    #[serde(default = "default_user_label")]
    pub user_label: String,
    /// Label printed in front of the bot's replies.
    #[serde(default = "default_bot_label")]
    pub bot_label: String,
    /// Keep only this many most recent history entries. Unbounded when unset.
    #[serde(default)]
    pub max_history: Option<usize>,
}

/// Defaults for `unitconv serve`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            user_label: default_user_label(),
            bot_label: default_bot_label(),
            max_history: None,
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

fn default_precision() -> usize {
    crate::core::convert::DEFAULT_PRECISION
}
fn default_user_label() -> String {
    "You".to_string()
}
fn default_bot_label() -> String {
    "Bot".to_string()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_enable_cors() -> bool {
    true
}

/// Loads, merges and validates the configuration.
///
/// With `explicit` set, only that file is read (on top of the defaults).
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "unitconv", "unitconv") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.unitconv.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.unitconv.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win whenever they differ from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.display.precision = if project_cfg.display.precision != default_precision() {
        project_cfg.display.precision
    } else {
        user.display.precision
    };
    merged.chat.user_label = if project_cfg.chat.user_label != default_user_label() {
        project_cfg.chat.user_label
    } else {
        user.chat.user_label
    };
    merged.chat.bot_label = if project_cfg.chat.bot_label != default_bot_label() {
        project_cfg.chat.bot_label
    } else {
        user.chat.bot_label
    };
    merged.chat.max_history = project_cfg.chat.max_history.or(user.chat.max_history);
    merged.server.host = if project_cfg.server.host != default_host() {
        project_cfg.server.host
    } else {
        user.server.host
    };
    merged.server.port = if project_cfg.server.port != default_port() {
        project_cfg.server.port
    } else {
        user.server.port
    };
    merged.server.enable_cors = if project_cfg.server.enable_cors != default_enable_cors() {
        project_cfg.server.enable_cors
    } else {
        user.server.enable_cors
    };
    merged
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if config.display.precision > MAX_PRECISION {
        return Err(anyhow!(UnitconvError::Config(format!(
            "display.precision must be at most {}, got {}.",
            MAX_PRECISION, config.display.precision
        ))));
    }
    if config.chat.user_label.trim().is_empty() || config.chat.bot_label.trim().is_empty() {
        return Err(anyhow!(UnitconvError::Config(
            "chat labels cannot be empty.".to_string()
        )));
    }
    if config.chat.max_history == Some(0) {
        return Err(anyhow!(UnitconvError::Config(
            "chat.max_history must be greater than zero when set.".to_string()
        )));
    }
    if config.server.host.parse::<IpAddr>().is_err() {
        return Err(anyhow!(UnitconvError::Config(format!(
            "server.host '{}' is not a valid IP address.",
            config.server.host
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [display]
            precision = 6

            [chat]
            bot_label = "Converter"
            max_history = 20

            [server]
            port = 9000
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.display.precision, 6);
        assert_eq!(config.chat.user_label, "You"); // Default
        assert_eq!(config.chat.bot_label, "Converter");
        assert_eq!(config.chat.max_history, Some(20));
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1"); // Default
        assert!(config.server.enable_cors); // Default
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.precision, 4);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[display]\ndigits = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let mut user = Config::default();
        user.display.precision = 2;
        user.chat.bot_label = "UserBot".into();
        user.server.port = 7000;

        let mut project = Config::default();
        project.display.precision = 8;
        project.chat.max_history = Some(10);

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.display.precision, 8);
        assert_eq!(merged.chat.bot_label, "UserBot"); // project left default
        assert_eq!(merged.chat.max_history, Some(10));
        assert_eq!(merged.server.port, 7000);
    }

    #[test]
    fn test_merge_without_project_returns_user() {
        let mut user = Config::default();
        user.server.enable_cors = false;
        assert_eq!(merge_configs(user.clone(), None), user);
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_precision_too_large() {
        let mut config = Config::default();
        config.display.precision = 20;
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("display.precision must be at most"));
    }

    #[test]
    fn test_validate_config_rejects_zero_history_and_bad_host() {
        let mut config = Config::default();
        config.chat.max_history = Some(0);
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.server.host = "not-an-ip".into();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.chat.user_label = "  ".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_explicit_config_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[display]\nprecision = 2\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.display.precision, 2);
    }

    #[test]
    fn test_load_explicit_config_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[display\nprecision = ").unwrap();

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_find_project_config_path_walks_up_to_git_root() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let nested = root.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_project_config_path(&nested),
            Some(root.join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_find_project_config_path_stops_at_git() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = root.join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert_eq!(find_project_config_path(&repo), None);
    }
}
