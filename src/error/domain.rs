//! Domain-specific error types using `thiserror`.
//!
//! Settings and plugin errors are defined next to their modules; this
//! module wraps them for the preference widgets.

use std::path::PathBuf;

use thiserror::Error;

use crate::{config::SettingsError, plugin::PluginError};

/// Errors raised while building or updating the preferences.
#[derive(Error, Debug)]
pub enum PreferencesError {
    /// Reading or writing a setting failed.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    /// The plugin manager rejected a request.
    #[error("Plugin error: {0}")]
    Plugin(#[from] PluginError),
    /// A toggle referred to a row that does not exist.
    #[error("Plugin row {index} out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },
    /// A plugin icon could not be loaded as an image.
    #[error("Failed to load icon {path:?}: {reason}")]
    ImageLoad { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::{error::domain::PreferencesError, plugin::PluginError};

    #[test]
    fn test_preferences_error_display() {
        let out_of_range = PreferencesError::RowOutOfRange { index: 3, len: 2 };
        assert_eq!(out_of_range.to_string(), "Plugin row 3 out of range (2 rows)");

        let plugin = PreferencesError::from(PluginError::NotFound {
            name: "Alarm".to_string(),
        });
        assert_eq!(plugin.to_string(), "Plugin error: Plugin not found: Alarm");

        let image = PreferencesError::ImageLoad {
            path: PathBuf::from("/icons/alarm.png"),
            reason: "unreadable".to_string(),
        };
        assert_eq!(
            image.to_string(),
            "Failed to load icon \"/icons/alarm.png\": unreadable"
        );
    }
}
