//! Application configuration.
//!
//! Stored as `config.yaml` in the platform config directory (or wherever
//! `CONF_TICKET_CONFIG` points) and holds:
//! - Avatar picker limits (maximum size, accepted types)
//! - Event details printed on the ticket

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::picker::{AcceptSet, DEFAULT_MAX_FILE_SIZE, MIB, PickerOptions, format_mib};
use crate::ticket::EventDetails;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "CONF_TICKET_CONFIG";

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: [&str; 5] = [
    "picker.max_file_size",
    "picker.accept",
    "event.name",
    "event.date",
    "event.location",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Avatar picker settings
    #[serde(default)]
    pub picker: PickerConfig,

    /// Event shown on the ticket
    #[serde(default)]
    pub event: EventDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Largest accepted avatar, in bytes (default: 5 MiB)
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Accepted MIME types, comma separated (default: image/*)
    #[serde(default)]
    pub accept: AcceptSet,
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            accept: AcceptSet::default(),
        }
    }
}

impl From<&PickerConfig> for PickerOptions {
    fn from(config: &PickerConfig) -> Self {
        PickerOptions {
            max_file_size: config.max_file_size,
            accepted: config.accept.clone(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        ProjectDirs::from("", "", "conf-ticket")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .ok_or_else(|| AppError::Config("could not determine a config directory".to_string()))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| AppError::OpenFile {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.check()?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        tracing::info!("saved config to {}", path.display());
        Ok(())
    }

    fn check(&self) -> Result<()> {
        if self.picker.max_file_size == 0 {
            return Err(AppError::Config(
                "picker.max_file_size must be greater than zero".to_string(),
            ));
        }
        if self.picker.accept.patterns().is_empty() {
            return Err(AppError::Config("picker.accept cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn picker_options(&self) -> PickerOptions {
        PickerOptions::from(&self.picker)
    }

    /// Read one value by dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "picker.max_file_size" => self.picker.max_file_size.to_string(),
            "picker.accept" => self.picker.accept.to_string(),
            "event.name" => self.event.name.clone(),
            "event.date" => self.event.date.clone(),
            "event.location" => self.event.location.clone(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set one value by dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "picker.max_file_size" => self.picker.max_file_size = parse_size(value)?,
            "picker.accept" => self.picker.accept = AcceptSet::new(value),
            "event.name" => self.event.name = non_empty(key, value)?,
            "event.date" => self.event.date = non_empty(key, value)?,
            "event.location" => self.event.location = non_empty(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        self.check()
    }

    /// `(key, value)` pairs in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn unknown_key(key: &str) -> AppError {
    AppError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Config(format!("{key} cannot be empty")));
    }
    Ok(value.to_string())
}

/// Parse a size such as `5242880`, `5MB`, `2.5MiB` or `512KB`
///
/// `KB`/`MB` are binary units, matching how limits are displayed.
pub fn parse_size(value: &str) -> Result<u64> {
    let value = value.trim();
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);

    let multiplier = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" | "kib" => 1024,
        "m" | "mb" | "mib" => MIB,
        _ => {
            return Err(AppError::Config(format!(
                "invalid size '{value}'. Expected bytes or a value like 5MB"
            )));
        }
    };

    let number: f64 = number
        .parse()
        .map_err(|_| AppError::Config(format!("invalid size '{value}'")))?;
    let bytes = (number * multiplier as f64).round();
    if bytes < 1.0 || !bytes.is_finite() {
        return Err(AppError::Config(format!(
            "invalid size '{value}'. Must be greater than zero"
        )));
    }
    Ok(bytes as u64)
}

/// Human form of a byte limit, `5MB` or `2.5MB`
pub fn display_size(bytes: u64) -> String {
    format!("{}MB", format_mib(bytes))
}
