//! Configuration management for Agendista
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CALENDAR_VIEWS, CONFIG_GENERATED, DEFAULT_CALENDAR_VIEW, TRUNCATE_DEFAULT_WIDTH, TRUNCATE_MAX_WIDTH,
    TRUNCATE_MIN_WIDTH,
};
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Calendar view to open on startup
    /// Options: "dia", "semana", "mes"
    pub default_view: String,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono format string for dates shown in lists
    pub date_format: String,
    /// chrono format string for appointment times
    pub time_format: String,
    /// Spell out dates in section headers ("15 de março de 2024")
    pub long_date_headers: bool,
    /// Width in characters before patient names are truncated in list rows
    pub truncate_width: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_view: DEFAULT_CALENDAR_VIEW.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::BR_DATE_FORMAT.to_string(),
            time_format: datetime::BR_TIME_FORMAT.to_string(),
            long_date_headers: true,
            truncate_width: TRUNCATE_DEFAULT_WIDTH,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("agendista.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("agendista").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate default view
        if !CALENDAR_VIEWS.contains(&self.ui.default_view.as_str()) {
            anyhow::bail!(
                "default_view must be one of {}, got '{}'",
                CALENDAR_VIEWS.join(", "),
                self.ui.default_view
            );
        }

        // Validate truncation width
        if self.display.truncate_width < TRUNCATE_MIN_WIDTH || self.display.truncate_width > TRUNCATE_MAX_WIDTH {
            anyhow::bail!(
                "truncate_width must be between {} and {} characters, got {}",
                TRUNCATE_MIN_WIDTH,
                TRUNCATE_MAX_WIDTH,
                self.display.truncate_width
            );
        }

        // Validate date/time formats
        if let Err(e) = chrono::NaiveDate::parse_from_str("01/01/2025", &self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}': {}", self.display.date_format, e);
        }

        if let Err(e) = chrono::NaiveTime::parse_from_str("12:00", &self.display.time_format) {
            anyhow::bail!("Invalid time_format '{}': {}", self.display.time_format, e);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Agendista Configuration File\n# Generated on {}\n\n",
            datetime::format_today()
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("agendista"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
