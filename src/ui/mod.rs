//! Libadwaita user interface.
//!
//! This module provides the application shell and the preferences dialog.

pub mod application;
pub mod preferences;

pub use {application::TomateApplication, preferences::PreferencesDialog};
