//! Plugin discovery and activation.

pub mod info;
pub mod manager;
pub mod registry;

pub use {
    info::{DEFAULT_ICON_NAME, PluginInfo},
    manager::{PluginError, PluginManager},
    registry::{PluginRegistry, default_plugin_dirs},
};
