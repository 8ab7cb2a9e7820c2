//! Application shell hosting the preferences dialog.
//!
//! The timer window itself lives elsewhere; this shell shows a minimal main
//! window whose button opens the shared preferences dialog.

use std::sync::Arc;

use {
    anyhow::{Error, Result as AnyhowResult},
    libadwaita::{
        Application, ApplicationWindow, HeaderBar, ToolbarView,
        gtk::{Align::Center, Button},
        prelude::{
            AdwApplicationWindowExt, ApplicationExt, ApplicationExtManual, ButtonExt,
            GtkApplicationExt, GtkWindowExt,
        },
    },
    tracing::info,
};

use crate::{
    config::SettingsManager,
    error::{ErrorReporter, PreferencesError, ResultExt},
    plugin::{PluginRegistry, default_plugin_dirs},
    services::Services,
    ui::preferences::PreferencesDialog,
};

/// Application identifier registered with GIO.
pub const APPLICATION_ID: &str = "com.github.tomate.Tomate";

/// Main application with its shared services.
pub struct TomateApplication {
    /// The Libadwaita application instance.
    pub app: Application,
    /// Settings store and plugin manager shared by all windows.
    pub services: Services,
}

impl TomateApplication {
    /// Creates the application with settings and plugins from the default
    /// XDG locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file or a plugin descriptor cannot
    /// be loaded.
    pub fn new() -> AnyhowResult<Self> {
        let settings = SettingsManager::new().add_context("Failed to initialize settings")?;
        let plugins = PluginRegistry::discover(&default_plugin_dirs())
            .add_context("Failed to discover plugins")?;

        let app = Application::builder()
            .application_id(APPLICATION_ID)
            .build();

        Ok(Self {
            app,
            services: Services::new(Arc::new(settings), Arc::new(plugins)),
        })
    }

    /// Runs the GTK main loop.
    pub fn run(&self) {
        let services = self.services.clone();
        self.app
            .connect_activate(move |app| activate(app, services.clone()));

        self.app.run();
    }
}

/// Presents the existing main window, building it on first activation.
fn activate(app: &Application, services: Services) {
    if let Some(window) = app.active_window() {
        window.present();
        return;
    }

    if let Err(e) = build_ui(app, services) {
        ErrorReporter::error(&Error::from(e), "Failed to build main window");
        app.quit();
    }
}

/// Builds the main window and the preferences dialog it opens.
fn build_ui(app: &Application, services: Services) -> Result<(), PreferencesError> {
    let window = ApplicationWindow::builder()
        .application(app)
        .title("Tomate")
        .default_width(360)
        .default_height(240)
        .build();

    let dialog = PreferencesDialog::new(services)?;

    let button = Button::builder()
        .label("Preferences")
        .halign(Center)
        .valign(Center)
        .build();

    let window_clone = window.clone();
    button.connect_clicked(move |_| {
        if let Err(e) = dialog.refresh_plugin() {
            ErrorReporter::error(&Error::from(e), "Failed to refresh plugins");
        }
        dialog.show(Some(&window_clone));
    });

    let toolbar_view = ToolbarView::new();
    toolbar_view.add_top_bar(&HeaderBar::new());
    toolbar_view.set_content(Some(&button));

    window.set_content(Some(&toolbar_view));
    window.present();

    info!("Main window ready");

    Ok(())
}
