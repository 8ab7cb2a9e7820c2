//! Sectioned user settings with XDG Base Directory compliance.
//!
//! Settings are stored as a JSON document of string values grouped by
//! section, and are written back to disk on every update.

use std::{
    collections::BTreeMap,
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    path::PathBuf,
};

use {
    parking_lot::RwLock,
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::debug,
};

use crate::config::{
    icons::{find_icon, icon_base_dirs},
    store::ConfigStore,
    timer::{DurationSetting, TIMER_SECTION},
};

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// The requested key does not exist in the section.
    #[error("Missing setting: [{section}] {key}")]
    MissingKey { section: String, key: String },
    /// The stored value could not be read as an integer.
    #[error("Setting [{section}] {key} is not an integer: {value:?}")]
    InvalidInteger {
        section: String,
        key: String,
        value: String,
    },
    /// No icon file matched the requested name and size.
    #[error("Icon not found: {name} ({size}px)")]
    IconNotFound { name: String, size: u32 },
}

/// Serializable user settings, grouped by section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Section name to key/value pairs.
    #[serde(default)]
    pub sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for UserSettings {
    fn default() -> Self {
        let mut settings = Self {
            sections: BTreeMap::new(),
        };

        for setting in DurationSetting::ALL {
            settings.set(
                TIMER_SECTION,
                setting.key(),
                setting.default_minutes().to_string(),
            );
        }

        settings
    }
}

impl UserSettings {
    /// Looks up a raw string value.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|values| values.get(key))
            .map(String::as_str)
    }

    /// Stores a raw string value, creating the section when needed.
    pub fn set(&mut self, section: &str, key: &str, value: String) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Overlays every value of `other` on top of `self`.
    fn merge(&mut self, other: Self) {
        for (section, values) in other.sections {
            self.sections.entry(section).or_default().extend(values);
        }
    }
}

/// Handles loading, saving, and lookup of user preferences.
#[derive(Debug)]
pub struct SettingsManager {
    /// Thread-safe user settings storage.
    settings: RwLock<UserSettings>,
    /// Path to the configuration file on disk.
    config_path: PathBuf,
    /// Base directories searched for themed icons.
    icon_dirs: Vec<PathBuf>,
}

impl SettingsManager {
    /// Creates a new settings manager with default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a new settings manager with a custom config path.
    ///
    /// Values missing from the file fall back to the defaults.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Custom path for the settings file
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the directory cannot be created or the
    /// existing file cannot be parsed.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let mut settings = UserSettings::default();
        if config_path.exists() {
            debug!("Loading settings from existing file: {:?}", config_path);
            let contents = read_to_string(&config_path)?;
            settings.merge(from_str(&contents)?);
        } else {
            debug!("Using default settings, no file at {:?}", config_path);
        }

        Ok(Self {
            settings: RwLock::new(settings),
            config_path,
            icon_dirs: icon_base_dirs(),
        })
    }

    /// Replaces the icon search directories.
    #[must_use]
    pub fn with_icon_dirs(mut self, icon_dirs: Vec<PathBuf>) -> Self {
        self.icon_dirs = icon_dirs;
        self
    }

    fn save_settings(&self) -> Result<(), SettingsError> {
        debug!("Saving settings to file: {:?}", self.config_path);
        let contents = to_string_pretty(&*self.settings.read())?;
        write(&self.config_path, contents)?;
        Ok(())
    }
}

impl ConfigStore for SettingsManager {
    fn get_int(&self, section: &str, key: &str) -> Result<i32, SettingsError> {
        let settings = self.settings.read();
        let value = settings
            .get(section, key)
            .ok_or_else(|| SettingsError::MissingKey {
                section: section.to_string(),
                key: key.to_string(),
            })?;

        value
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidInteger {
                section: section.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            })
    }

    fn set(&self, section: &str, key: &str, value: String) -> Result<(), SettingsError> {
        debug!(section, key, value = %value, "Updating setting");
        self.settings.write().set(section, key, value);
        self.save_settings()
    }

    fn get_icon_path(&self, name: &str, size: u32) -> Result<PathBuf, SettingsError> {
        find_icon(&self.icon_dirs, name, size).ok_or_else(|| SettingsError::IconNotFound {
            name: name.to_string(),
            size,
        })
    }
}

/// Path of the settings file inside the XDG config directory.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("tomate");
    config_dir.push("settings.json");
    config_dir
}

/// Gets the XDG config home directory.
///
/// Uses `XDG_CONFIG_HOME` if set, otherwise `$HOME/.config`.
fn get_xdg_config_home() -> PathBuf {
    resolve_xdg_dir(var("XDG_CONFIG_HOME").ok(), var("HOME").ok(), ".config")
}

/// Gets the XDG data home directory.
///
/// Uses `XDG_DATA_HOME` if set, otherwise `$HOME/.local/share`.
#[must_use]
pub fn get_xdg_data_home() -> PathBuf {
    resolve_xdg_dir(var("XDG_DATA_HOME").ok(), var("HOME").ok(), ".local/share")
}

/// Picks the XDG variable when non-empty, else `home_relative` under `$HOME`.
fn resolve_xdg_dir(
    xdg_value: Option<String>,
    home: Option<String>,
    home_relative: &str,
) -> PathBuf {
    if let Some(value) = xdg_value
        && !value.is_empty()
    {
        return PathBuf::from(value);
    }

    if let Some(home) = home {
        return PathBuf::from(home).join(home_relative);
    }

    // Fallback to current directory if HOME is not set (shouldn't happen on Unix)
    PathBuf::from(".")
}
