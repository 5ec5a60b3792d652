//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::toast::DEFAULT_MAX_TEXT_BYTES;

/// Default tracing filter when neither `RUST_LOG` nor `log_level` is set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Windows-specific configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowsConfig {
    /// Also show usage errors in a modal dialog box
    pub usage_dialog: Option<bool>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub max_text_bytes: Option<usize>,
    pub log_level: Option<String>,
    pub windows: Option<WindowsConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            max_text_bytes: Some(DEFAULT_MAX_TEXT_BYTES),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
            windows: Some(WindowsConfig {
                usage_dialog: Some(false),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            max_text_bytes: other.max_text_bytes.or(self.max_text_bytes),
            log_level: other.log_level.or(self.log_level),
            windows: Self::merge_windows_config(self.windows, other.windows),
        }
    }

    fn merge_windows_config(
        base: Option<WindowsConfig>,
        other: Option<WindowsConfig>,
    ) -> Option<WindowsConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(WindowsConfig {
                usage_dialog: o.usage_dialog.or(b.usage_dialog),
            }),
        }
    }

    /// Get the per-field length limit, or the default if not set
    pub fn max_text_bytes_or_default(&self) -> usize {
        self.max_text_bytes.unwrap_or(DEFAULT_MAX_TEXT_BYTES)
    }

    /// Get the log filter, or "warn" if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Get usage dialog setting, or false if not set
    pub fn usage_dialog_or_default(&self) -> bool {
        self.windows
            .as_ref()
            .and_then(|w| w.usage_dialog)
            .unwrap_or(false)
    }
}
