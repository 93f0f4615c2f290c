use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::FormatMode;
use crate::{tlog_debug, Error, Result};

/// Construction-time options for a time picker widget.
///
/// Every field has a default, so a partial (or missing) `timepick.toml` is
/// valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Initial value, `HH:MM` or `HH:MM AM|PM` depending on the format.
    pub default_time: Option<String>,
    /// Caption shown above the widget. Presentation only.
    pub label: Option<String>,
    /// When false the overlay never opens.
    pub show_dropdown: bool,
    /// When false the text fields reject every keystroke.
    pub allow_inline_edit: bool,
    pub use_24_hour_format: bool,
    /// Reserved. Parsed but has no behavior.
    pub increment_by: Option<u32>,
    /// Reserved. Parsed but has no behavior.
    pub compact_mode: Option<bool>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            default_time: None,
            label: None,
            show_dropdown: true,
            allow_inline_edit: true,
            use_24_hour_format: false,
            increment_by: None,
            compact_mode: None,
        }
    }
}

impl WidgetConfig {
    pub fn app_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".timepick"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("timepick.toml"))
    }

    pub fn format_mode(&self) -> FormatMode {
        FormatMode::from_24_hour(self.use_24_hour_format)
    }

    /// Load from `~/.timepick/timepick.toml`, falling back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        tlog_debug!("WidgetConfig::load path={}", path.display());
        if !path.exists() {
            tlog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        tlog_debug!(
            "Config loaded: default_time={:?} dropdown={} inline_edit={} 24h={}",
            config.default_time,
            config.show_dropdown,
            config.allow_inline_edit,
            config.use_24_hour_format
        );
        if config.increment_by.is_some() || config.compact_mode.is_some() {
            tlog_debug!("Reserved options increment_by/compact_mode are ignored");
        }
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                tlog_debug!("Creating config directory: {}", parent.display());
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        tlog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}
