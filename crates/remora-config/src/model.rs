//! Typed settings models and presentation enums.
//!
//! # Design
//! - Pure data carriers serialized with the wire names the host application
//!   stores on disk.
//! - Connection fields feed the daemon adapter; presentation fields stay in
//!   the UI layer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Number of download-path history entries retained.
const DOWNLOAD_PATH_HISTORY: usize = 10;

/// Application settings owned by the surrounding desktop shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Daemon host, optionally carrying an explicit `http://` or `https://`
    /// prefix.
    pub host: String,
    /// Daemon RPC port.
    pub port: u16,
    /// RPC username; empty disables authentication.
    pub username: String,
    /// RPC password, sent only when a username is configured.
    pub password: String,
    /// UI locale identifier.
    pub language: String,
    /// UI color theme.
    pub theme: Theme,
    /// Share ratio at which seeding should stop; zero means unlimited.
    pub max_upload_ratio: f64,
    /// Speed limit applied in slow mode, in units of `slow_speed_unit`.
    pub slow_speed_limit: i64,
    /// Unit for the slow-mode speed limit.
    pub slow_speed_unit: SpeedUnit,
    /// Recently used download directories, most recent first.
    pub download_paths: Vec<String>,
    /// Last known default download path reported by the daemon.
    pub default_download_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9091,
            username: String::new(),
            password: String::new(),
            language: "en".to_string(),
            theme: Theme::Auto,
            max_upload_ratio: 0.0,
            slow_speed_limit: 0,
            slow_speed_unit: SpeedUnit::KibPerSec,
            download_paths: Vec::new(),
            default_download_path: None,
        }
    }
}

impl Config {
    /// Validate the fields the daemon adapter depends on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when the host is empty, the
    /// port is zero, or a numeric threshold is negative.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "host",
                reason: "must not be empty",
                value: Some(self.host.clone()),
            });
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidField {
                field: "port",
                reason: "must be non-zero",
                value: Some(self.port.to_string()),
            });
        }
        if self.max_upload_ratio < 0.0 {
            return Err(ConfigError::InvalidField {
                field: "max_upload_ratio",
                reason: "must not be negative",
                value: Some(self.max_upload_ratio.to_string()),
            });
        }
        if self.slow_speed_limit < 0 {
            return Err(ConfigError::InvalidField {
                field: "slow_speed_limit",
                reason: "must not be negative",
                value: Some(self.slow_speed_limit.to_string()),
            });
        }
        Ok(())
    }

    /// Record a download directory at the front of the history, deduplicated
    /// and capped.
    pub fn remember_download_path(&mut self, path: &str) {
        self.download_paths.retain(|known| known != path);
        self.download_paths.insert(0, path.to_string());
        self.download_paths.truncate(DOWNLOAD_PATH_HISTORY);
    }
}

/// UI color theme recorded in settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette.
    Light,
    /// Dark palette.
    Dark,
    /// Follow the desktop environment.
    #[default]
    Auto,
}

impl Theme {
    #[must_use]
    /// Render the theme as its lowercase string representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(ConfigError::InvalidField {
                field: "theme",
                reason: "unknown theme name",
                value: Some(other.to_string()),
            }),
        }
    }
}

/// Unit attached to the slow-mode speed limit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SpeedUnit {
    /// Kibibytes per second.
    #[default]
    #[serde(rename = "KiB/s")]
    KibPerSec,
    /// Mebibytes per second.
    #[serde(rename = "MiB/s")]
    MibPerSec,
}

impl SpeedUnit {
    #[must_use]
    /// Render the unit the way the UI displays it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KibPerSec => "KiB/s",
            Self::MibPerSec => "MiB/s",
        }
    }

    #[must_use]
    /// Bytes per second represented by one unit step.
    pub const fn bytes_per_step(self) -> i64 {
        match self {
            Self::KibPerSec => 1024,
            Self::MibPerSec => 1024 * 1024,
        }
    }
}
