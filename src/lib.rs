//! Tomate - Pomodoro timer preferences
//!
//! The preferences dialog of the Tomate Pomodoro timer: timer durations
//! backed by a sectioned settings store, and a plugin list that switches
//! plugins on and off through the plugin manager. Built with Libadwaita.

pub mod config;
pub mod error;
pub mod plugin;
pub mod services;
pub mod state;
pub mod ui;

#[cfg(test)]
mod testing;

// Re-export key types for convenience
pub use {
    config::{ConfigStore, DurationSetting, SettingsManager, TimerDurations},
    error::PreferencesError,
    plugin::{PluginInfo, PluginManager, PluginRegistry},
    services::Services,
    state::{ExtensionList, PluginRow},
    ui::{PreferencesDialog, TomateApplication},
};
