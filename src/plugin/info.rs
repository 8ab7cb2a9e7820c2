//! Plugin metadata as reported by the plugin manager.

use serde::{Deserialize, Serialize};

/// Icon name used when a plugin does not declare one.
pub const DEFAULT_ICON_NAME: &str = "tomate-plugin";

/// Metadata and activation state of one discovered plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin name, used for activation.
    pub name: String,
    /// Version string shown next to the name.
    pub version: String,
    /// One-line description.
    pub description: String,
    /// Themed icon name, if the plugin provides one.
    #[serde(default)]
    pub icon: Option<String>,
    /// Whether the plugin is currently active.
    #[serde(default)]
    pub is_activated: bool,
}

impl PluginInfo {
    /// Icon name to look up, falling back to [`DEFAULT_ICON_NAME`].
    #[must_use]
    pub fn icon_name(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON_NAME)
    }
}
