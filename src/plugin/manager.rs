//! Plugin manager interface consumed by the preferences.

use std::{io::Error as StdError, path::PathBuf};

use {serde_json::Error as SerdeJsonError, thiserror::Error};

use crate::plugin::info::PluginInfo;

/// Error type for plugin discovery and activation.
#[derive(Error, Debug)]
pub enum PluginError {
    /// No plugin with this name was discovered.
    #[error("Plugin not found: {name}")]
    NotFound { name: String },
    /// Failed to read a plugin directory or descriptor.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// A descriptor file is not valid JSON.
    #[error("Invalid plugin descriptor {path:?}: {source}")]
    InvalidDescriptor {
        path: PathBuf,
        #[source]
        source: SerdeJsonError,
    },
}

/// Discovers plugins and switches them on and off by name.
pub trait PluginManager: Send + Sync {
    /// All discovered plugins in discovery order.
    fn list_all_plugins(&self) -> Vec<PluginInfo>;

    /// Activates the named plugin.
    ///
    /// # Errors
    ///
    /// Returns `PluginError::NotFound` for unknown names.
    fn activate_by_name(&self, name: &str) -> Result<(), PluginError>;

    /// Deactivates the named plugin.
    ///
    /// # Errors
    ///
    /// Returns `PluginError::NotFound` for unknown names.
    fn deactivate_by_name(&self, name: &str) -> Result<(), PluginError>;
}
