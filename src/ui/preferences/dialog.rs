//! Main preferences dialog implementation.
//!
//! `PreferencesDialog` is a modal, fixed-size window switching between the
//! Timer and Extensions pages. Closing it only hides the window, so the
//! pages keep their state until the dialog is shown again.

use {
    libadwaita::{
        HeaderBar, ToolbarView, ViewStack, ViewSwitcher,
        ViewSwitcherPolicy::Wide,
        Window,
        gtk::Window as GtkWindow,
        prelude::{AdwWindowExt, GtkWindowExt, IsA, WidgetExt},
    },
    tracing::debug,
};

use crate::{
    error::PreferencesError,
    services::Services,
    ui::preferences::{ExtensionPreferencesPage, TimerPreferencesPage},
};

/// Stack page name of the Timer view.
pub const TIMER_VIEW: &str = "timer";

/// Stack page name of the Extensions view.
pub const EXTENSION_VIEW: &str = "extension";

/// Modal preferences window with Timer and Extensions views.
pub struct PreferencesDialog {
    /// The underlying Libadwaita window.
    pub widget: Window,
    /// Stack holding both views.
    pub stack: ViewStack,
    /// Timer durations view.
    pub timer_page: TimerPreferencesPage,
    /// Plugin list view.
    pub extension_page: ExtensionPreferencesPage,
}

impl PreferencesDialog {
    /// Creates a new, hidden preferences dialog.
    ///
    /// # Arguments
    ///
    /// * `services` - Configuration store and plugin manager
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` if the timer durations cannot be read.
    pub fn new(services: Services) -> Result<Self, PreferencesError> {
        let timer_page = TimerPreferencesPage::new(services.config.clone())?;
        let extension_page = ExtensionPreferencesPage::new(services);

        let stack = ViewStack::new();
        stack.add_titled(&timer_page.widget, Some(TIMER_VIEW), "Timer");
        stack.add_titled(&extension_page.widget, Some(EXTENSION_VIEW), "Extensions");

        let switcher = ViewSwitcher::builder()
            .stack(&stack)
            .policy(Wide)
            .build();

        let header_bar = HeaderBar::builder().title_widget(&switcher).build();

        let toolbar_view = ToolbarView::new();
        toolbar_view.add_top_bar(&header_bar);
        toolbar_view.set_content(Some(&stack));

        let widget = Window::builder()
            .title("Preferences")
            .modal(true)
            .resizable(false)
            .hide_on_close(true)
            .default_width(350)
            .default_height(200)
            .build();
        widget.set_size_request(350, 200);
        widget.set_content(Some(&toolbar_view));

        debug!("PreferencesDialog: Created with two views");

        Ok(Self {
            widget,
            stack,
            timer_page,
            extension_page,
        })
    }

    /// Reloads the plugin list of the Extensions view.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` if a plugin row cannot be built.
    pub fn refresh_plugin(&self) -> Result<(), PreferencesError> {
        self.extension_page.refresh()
    }

    /// Shows the dialog, centered on `parent` when given.
    pub fn show(&self, parent: Option<&impl IsA<GtkWindow>>) {
        debug!("PreferencesDialog: Showing dialog");
        self.widget.set_transient_for(parent);
        self.widget.present();
    }

    /// Hides the dialog, keeping its contents.
    pub fn hide(&self) {
        debug!("PreferencesDialog: Hiding dialog");
        self.widget.set_visible(false);
    }

    /// Whether the dialog is currently shown.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.widget.is_visible()
    }
}
