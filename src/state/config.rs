//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure holding the settings the
//! money fields are built from. Entered amounts are never persisted; only the
//! locale, blur strategy and field layout are.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/money-input/config.json`
//! - macOS: `~/Library/Application Support/money-input/config.json`
//! - Windows: `%APPDATA%/money-input/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::money_input::{BlurStrategy, MoneyInputState};
use crate::domain::{AmountCents, Locale};
use crate::formatter::AmountFormatter;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
pub const APP_NAME: &str = "money-input";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Label of the field created when the config lists none.
const DEFAULT_LABEL: &str = "Amount";

// ============================================================================
// FieldConfig
// ============================================================================

/// Layout entry for one money field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldConfig {
    pub label: String,
    /// Read-only fields show their initial value and accept no input.
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub initial_cents: Option<AmountCents>,
}

impl FieldConfig {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            initial_cents: None,
        }
    }
}

fn default_fields() -> Vec<FieldConfig> {
    vec![FieldConfig::new(DEFAULT_LABEL)]
}

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// # Fields
///
/// * `locale` - BCP-47 tag selecting decimal separator and symbol placement
/// * `blur_strategy` - Where blur-time cents are written
/// * `fields` - The money fields to show, in tab order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub blur_strategy: BlurStrategy,
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            blur_strategy: BlurStrategy::default(),
            fields: default_fields(),
        }
    }
}

impl AppConfig {
    /// Returns the application's configuration directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory is unknown or the
    /// directory cannot be created.
    pub fn config_dir() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::config_dir`].
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Loads the configuration from disk, falling back to defaults on any error.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::try_load_from(&path)) {
            Ok(config) => {
                tracing::info!(locale = %config.locale, "Loaded configuration");
                config
            }
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON cannot be parsed.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config.normalized())
    }

    /// Saves the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot be
    /// written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Saves the configuration as pretty JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// An empty field list would leave nothing to edit.
    #[must_use]
    fn normalized(mut self) -> Self {
        if self.fields.is_empty() {
            self.fields = default_fields();
        }
        self
    }

    /// Build the field states described by this configuration.
    #[must_use]
    pub fn build_fields(&self) -> Vec<MoneyInputState> {
        let formatter = AmountFormatter::new(self.locale.clone());
        self.fields
            .iter()
            .map(|field| {
                let state = MoneyInputState::new(field.label.clone(), formatter.clone())
                    .with_blur_strategy(self.blur_strategy);
                let state = match field.initial_cents {
                    Some(cents) => state.with_amount(cents),
                    None => state,
                };
                state.with_disabled(field.disabled)
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
