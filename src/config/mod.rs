//! Input and settings file loading.
//!
//! Two files are read:
//!
//! 1. The **element description** (required): a JSON object with a
//!    `housing` block, an optional `name` and an optional
//!    `library.pattern` settings block.
//! 2. The **tool settings file** (optional): base [`Settings`] under
//!    `pattern` plus `logging`. Searched in this order:
//!    - Path specified via `--settings` CLI flag
//!    - Default location:
//!      - **Linux/macOS:** `~/.ipc-landgen/settings.json`
//!      - **Windows:** `%USERPROFILE%\.ipc-landgen\settings.json`
//!
//! An element's `library.pattern` block replaces the base settings as a
//! whole; fields it omits take the built-in defaults.

mod settings;

pub use settings::{
    BallSettings, ClearanceSettings, FontSizeSettings, LineWidthSettings, MaximumSettings,
    MinimumSettings, PolarityMark, RatioSettings, RoundoffSettings, Settings, ToleranceSettings,
};

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::housing::RawHousing;

/// An element description as read from the input file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Element {
    /// Explicit pattern name; computed from the housing when absent.
    pub name: Option<String>,

    /// Housing description.
    pub housing: RawHousing,

    /// Library options.
    pub library: LibraryConfig,
}

impl Element {
    /// Returns the settings for this element: its own `library.pattern`
    /// block when present, otherwise `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen settings fail validation.
    pub fn settings(&self, base: &Settings) -> Result<Settings, ConfigError> {
        let settings = self.library.pattern.clone().unwrap_or_else(|| base.clone());
        settings.validate()?;
        Ok(settings)
    }
}

/// The `library` block of an element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Pattern generation settings.
    pub pattern: Option<Settings>,
}

/// Tool settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Base pattern settings.
    #[serde(default)]
    pub pattern: Settings,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Returns the default configuration directory.
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".ipc-landgen"))
}

/// Returns the platform-specific default settings file path.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join("settings.json"))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Loads an element description.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or malformed.
pub fn load_element(path: &Path) -> Result<Element, ConfigError> {
    read_json(path)
}

/// Loads the tool settings file.
///
/// With an explicit `path` the file must exist. Without one, the default
/// location is tried and built-in defaults are used if nothing is there.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_tool_config(path: Option<&Path>) -> Result<ToolConfig, ConfigError> {
    let config: ToolConfig = match path {
        Some(p) => read_json(p)?,
        None => match default_settings_path() {
            Some(p) if p.exists() => read_json(&p)?,
            _ => ToolConfig::default(),
        },
    };

    config.pattern.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc7351::density::DensityLevel;

    #[test]
    fn default_settings_path_exists() {
        let path = default_settings_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("settings.json"));
    }

    #[test]
    fn parse_element_without_library() {
        let json = r#"{
            "name": "TEST",
            "housing": { "bodyLength": 1.0, "bodyWidth": 0.5 }
        }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.name.as_deref(), Some("TEST"));
        let settings = element.settings(&Settings::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn element_settings_override_base() {
        let json = r#"{
            "housing": {},
            "library": { "pattern": { "densityLevel": "L" } }
        }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        let base = Settings {
            decimals: 4,
            ..Settings::default()
        };
        let settings = element.settings(&base).unwrap();
        assert_eq!(settings.density_level, DensityLevel::Least);
        assert_eq!(settings.decimals, 3);
    }

    #[test]
    fn missing_element_file() {
        let err = load_element(Path::new("/nonexistent/element.json")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn reject_unknown_tool_config_fields() {
        let result: Result<ToolConfig, _> = serde_json::from_str(r#"{"unknown_field": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn parse_tool_config() {
        let json = r#"{
            "pattern": { "decimals": 2 },
            "logging": { "level": "debug" }
        }"#;
        let config: ToolConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.pattern.decimals, 2);
        assert_eq!(config.logging.level, "debug");
    }
}
