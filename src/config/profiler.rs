use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;

use crate::error::ProfilerError;

/// Names a TOML file to load the profiler configuration from
pub const CONFIG_PATH_ENV: &str = "SCOPED_PROFILER_CONFIG";
/// Overrides `enabled` from the file (`1`/`true`/`0`/`false`)
pub const ENABLED_ENV: &str = "SCOPED_PROFILER_ENABLED";

const DEFAULT_CONFIG_FILE: &str = "profiler.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerConfig {
    /// Whether runners built from this config report their measurements
    pub enabled: bool,
    /// Level `TracingReceiver::from_config` logs records at
    pub log_level: String,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        ProfilerConfig {
            enabled: false,
            log_level: "info".to_string(),
        }
    }
}

impl ProfilerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ProfilerError> {
        Ok(toml::from_str::<ProfilerConfig>(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfilerError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ProfilerError::from(e).with_context(path.display().to_string()))?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(path.display().to_string()))
    }

    /// Apply `SCOPED_PROFILER_ENABLED` if it is set to something we understand.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(value) = std::env::var(ENABLED_ENV) {
            match parse_flag(&value) {
                Some(enabled) => self.enabled = enabled,
                None => tracing::warn!(
                    var = ENABLED_ENV,
                    value = %value,
                    "Ignoring unrecognised profiler flag"
                ),
            }
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn get_config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

fn load_config_internal() -> ProfilerConfig {
    let config_path = get_config_path();

    let config = if config_path.exists() {
        match ProfilerConfig::load(&config_path) {
            Ok(config) => {
                tracing::debug!(path = ?config_path, "Loaded profiler config");
                config
            }
            Err(e) => {
                tracing::warn!(path = ?config_path, error = %e, "Failed to load profiler config, using defaults");
                ProfilerConfig::default()
            }
        }
    } else {
        tracing::debug!("Using default profiler configuration");
        ProfilerConfig::default()
    };

    config.with_env_overrides()
}

lazy_static! {
    static ref PROFILER_CONFIG: ProfilerConfig = load_config_internal();
}

/// Get the process-wide profiler configuration (loaded once on first use)
pub fn get_config() -> &'static ProfilerConfig {
    &PROFILER_CONFIG
}
