//! Configuration types and loading.
//!
//! Config is loaded from a JSON file (e.g. `~/.ringside/config.json`) and environment.
//! Kept minimal: the window only needs to know which robot to attribute
//! unlabelled messages to.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Window settings.
    #[serde(default)]
    pub window: WindowConfig,
}

/// Window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    /// Robot name used when a delivered message does not carry one (default "nao").
    #[serde(default = "default_robot")]
    pub default_robot: String,
}

fn default_robot() -> String {
    "nao".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            default_robot: default_robot(),
        }
    }
}

/// Resolve the default robot name: env RINGSIDE_ROBOT overrides config.
pub fn resolve_default_robot(config: &Config) -> String {
    std::env::var("RINGSIDE_ROBOT")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            let configured = config.window.default_robot.trim();
            if configured.is_empty() {
                default_robot()
            } else {
                configured.to_string()
            }
        })
}

/// Resolve config path from env or default.
pub fn default_config_path() -> PathBuf {
    std::env::var("RINGSIDE_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(".ringside").join("config.json"))
                .unwrap_or_else(|| PathBuf::from("config.json"))
        })
}

/// Load config from the default path (or RINGSIDE_CONFIG_PATH). Missing file => default config.
/// Returns the config and the path that was used.
pub fn load_config(path: Option<PathBuf>) -> Result<(Config, PathBuf)> {
    let path = path.unwrap_or_else(default_config_path);
    let config = if !path.exists() {
        log::debug!("config file not found, using defaults: {}", path.display());
        Config::default()
    } else {
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        serde_json::from_str(&s)
            .with_context(|| format!("parsing config from {}", path.display()))?
    };
    Ok((config, path))
}
