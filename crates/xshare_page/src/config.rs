//! Page configuration, read from a RON file.
//!
//! Every field has a default, so a partial file (or none at all) is fine.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use ui_logging::ui_info;
use xshare_core::{CoreSettings, ToastPolicy};

use crate::error::ConfigError;
use crate::logging::LoggingConfig;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub toast: ToastConfig,
    pub filter: FilterConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub policy: ToastPolicy,
    /// Auto-dismiss delay for general notifications.
    pub default_timeout_ms: u64,
    /// Auto-dismiss delay for wizard notifications.
    pub form_timeout_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            policy: ToastPolicy::Replace,
            default_timeout_ms: 3000,
            form_timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub debounce_ms: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub fade_ms: u64,
    pub frame_interval_ms: u64,
    pub ripple_ms: u64,
    pub loading_button_ms: u64,
    pub pulse_ms: u64,
    pub announcement_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fade_ms: 300,
            frame_interval_ms: 16,
            ripple_ms: 600,
            loading_button_ms: 2000,
            pulse_ms: 150,
            announcement_ms: 1000,
        }
    }
}

impl UiConfig {
    /// Loads `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                ui_info!("No config at {:?}; using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_ron_str(&content)
    }

    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    pub fn core_settings(&self) -> CoreSettings {
        CoreSettings {
            toast_policy: self.toast.policy,
            default_toast_timeout: Duration::from_millis(self.toast.default_timeout_ms),
            form_toast_timeout: Duration::from_millis(self.toast.form_timeout_ms),
            filter_debounce: Duration::from_millis(self.filter.debounce_ms),
        }
    }
}
