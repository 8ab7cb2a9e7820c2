//! Preferences dialog with Timer and Extensions views.


pub mod dialog;
pub mod extension_page;
pub mod timer_page;

pub use {
    dialog::PreferencesDialog, extension_page::ExtensionPreferencesPage,
    timer_page::TimerPreferencesPage,
};
