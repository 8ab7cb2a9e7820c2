//! Toolkit-independent state observed by the preference widgets.

pub mod extension_list;

pub use extension_list::{ExtensionList, PLUGIN_ICON_SIZE, PluginRow};
