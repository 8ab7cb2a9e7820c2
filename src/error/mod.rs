//! Error handling using `thiserror` and `anyhow`.
//!
//! Domain error types give precise failures to callers; operational
//! helpers add context and report errors raised inside UI callbacks.

pub mod domain;
pub mod operational;

pub use {
    domain::PreferencesError,
    operational::{ErrorReporter, ResultExt},
};
