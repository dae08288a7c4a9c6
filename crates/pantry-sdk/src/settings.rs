//! User preferences, loaded from and saved to a TOML file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pantry_expiry::{HighlightConfig, Threshold};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{SdkError, SdkResult};

/// Keys accepted by [`Settings::get`] and [`Settings::set`].
pub const SETTING_KEYS: [&str; 6] = [
    "expiring_soon_days",
    "highlight_expired",
    "highlight_expiring_soon",
    "show_obtained_date",
    "show_status_banner",
    "suppress_duplicate_prompts",
];

/// Display and classification preferences.
///
/// Missing keys in a settings file take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Days before expiration at which an item counts as expiring soon.
    pub expiring_soon_days: Threshold,
    pub highlight_expired: bool,
    pub highlight_expiring_soon: bool,
    /// Show the obtained date on list rows.
    pub show_obtained_date: bool,
    /// Show the expired / expiring-soon banner above a list.
    pub show_status_banner: bool,
    /// Skip the warning when adding an item that already exists.
    pub suppress_duplicate_prompts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            expiring_soon_days: Threshold::DEFAULT,
            highlight_expired: true,
            highlight_expiring_soon: true,
            show_obtained_date: true,
            show_status_banner: true,
            suppress_duplicate_prompts: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SdkError::SettingsIo {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&text).map_err(|e| SdkError::SettingsParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write the settings to `path`, replacing any existing file atomically.
    pub fn save(&self, path: impl AsRef<Path>) -> SdkResult<()> {
        let path = path.as_ref();
        let text = self.to_toml()?;
        let io_err = |source: io::Error| SdkError::SettingsIo {
            path: path.to_path_buf(),
            source,
        };
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(io_err)?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(io_err)?;
        tmp.write_all(text.as_bytes()).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;
        debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    pub fn to_toml(&self) -> SdkResult<String> {
        toml::to_string_pretty(self).map_err(|e| SdkError::SettingsEncode(e.to_string()))
    }

    pub fn threshold(&self) -> Threshold {
        self.expiring_soon_days
    }

    pub fn highlight_config(&self) -> HighlightConfig {
        HighlightConfig {
            highlight_expired: self.highlight_expired,
            highlight_expiring_soon: self.highlight_expiring_soon,
        }
    }

    /// The value of `key` as text.
    pub fn get(&self, key: &str) -> SdkResult<String> {
        let value = match key {
            "expiring_soon_days" => self.expiring_soon_days.days().to_string(),
            "highlight_expired" => self.highlight_expired.to_string(),
            "highlight_expiring_soon" => self.highlight_expiring_soon.to_string(),
            "show_obtained_date" => self.show_obtained_date.to_string(),
            "show_status_banner" => self.show_status_banner.to_string(),
            "suppress_duplicate_prompts" => self.suppress_duplicate_prompts.to_string(),
            _ => return Err(SdkError::UnknownSetting(key.to_string())),
        };
        Ok(value)
    }

    /// Parse `value` and assign it to `key`. On error nothing changes.
    pub fn set(&mut self, key: &str, value: &str) -> SdkResult<()> {
        let flag = match key {
            "expiring_soon_days" => {
                let days: u32 = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid(key, value, "expected a number of days"))?;
                self.expiring_soon_days = Threshold::new(days)
                    .map_err(|e| invalid(key, value, &e.to_string()))?;
                return Ok(());
            }
            "highlight_expired" => &mut self.highlight_expired,
            "highlight_expiring_soon" => &mut self.highlight_expiring_soon,
            "show_obtained_date" => &mut self.show_obtained_date,
            "show_status_banner" => &mut self.show_status_banner,
            "suppress_duplicate_prompts" => &mut self.suppress_duplicate_prompts,
            _ => return Err(SdkError::UnknownSetting(key.to_string())),
        };
        *flag = parse_flag(value).ok_or_else(|| invalid(key, value, "expected true or false"))?;
        Ok(())
    }

    /// Every key with its current value, in [`SETTING_KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        SETTING_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|v| (*key, v)))
            .collect()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> SdkError {
    SdkError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
