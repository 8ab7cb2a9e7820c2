//! Typed access to the sectioned configuration store.

use std::path::PathBuf;

use crate::config::settings::SettingsError;

/// Key/value configuration store organised by section.
///
/// Preference widgets only talk to this trait, so they can be driven by
/// [`SettingsManager`](crate::config::SettingsManager) in the application
/// and by in-memory stores in tests.
pub trait ConfigStore: Send + Sync {
    /// Reads an integer value.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the key is missing or not an integer.
    fn get_int(&self, section: &str, key: &str) -> Result<i32, SettingsError>;

    /// Writes a value and persists it immediately.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the store cannot be saved.
    fn set(&self, section: &str, key: &str, value: String) -> Result<(), SettingsError>;

    /// Resolves a themed icon name to an image file of the given pixel size.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::IconNotFound` if no file matches.
    fn get_icon_path(&self, name: &str, size: u32) -> Result<PathBuf, SettingsError>;
}
