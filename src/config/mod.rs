//! User preferences and persistent settings.
//!
//! This module provides the sectioned settings store with XDG Base Directory
//! compliance, icon lookup, and the timer duration keys.

pub mod icons;
pub mod settings;
pub mod store;
pub mod timer;

pub use {
    settings::{SettingsError, SettingsManager, UserSettings, get_config_path, get_xdg_data_home},
    store::ConfigStore,
    timer::{DurationSetting, MAX_DURATION, MIN_DURATION, TIMER_SECTION, TimerDurations},
};
