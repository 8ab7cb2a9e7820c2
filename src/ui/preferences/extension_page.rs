//! Extensions preferences page.
//!
//! Renders the rows of an [`ExtensionList`] as a boxed list with an
//! activation check button, the plugin icon and its description. Toggling
//! a check button goes through the list so the plugin manager is updated
//! before the row is considered changed.

use std::sync::Arc;

use {
    anyhow::Error,
    libadwaita::{
        PreferencesGroup, PreferencesPage,
        gdk::Texture,
        gtk::{
            AccessibleRole::Group,
            Align::{Center, Start},
            Box as GtkBox, CheckButton, Image, Label, ListBox, ListBoxRow,
            Orientation::Horizontal,
            SelectionMode::Browse,
        },
        prelude::{
            BoxExt, CheckButtonExt, ListBoxRowExt, PreferencesGroupExt, PreferencesPageExt,
            WidgetExt,
        },
    },
    parking_lot::RwLock,
    tracing::debug,
};

use crate::{
    error::{ErrorReporter, PreferencesError},
    services::Services,
    state::{ExtensionList, PLUGIN_ICON_SIZE, PluginRow},
};

/// Preferences page listing every discovered plugin.
pub struct ExtensionPreferencesPage {
    /// The underlying Libadwaita preferences page widget.
    pub widget: PreferencesPage,
    /// List box holding one row per plugin.
    pub list_box: ListBox,
    /// Row data rendered by `list_box`.
    pub model: Arc<RwLock<ExtensionList>>,
    /// Shared configuration and plugin services.
    services: Services,
}

impl ExtensionPreferencesPage {
    /// Creates an empty page; call [`refresh`](Self::refresh) to fill it.
    pub fn new(services: Services) -> Self {
        let widget = PreferencesPage::builder()
            .title("Extensions")
            .icon_name("application-x-addon-symbolic")
            .accessible_role(Group)
            .build();

        let group = PreferencesGroup::builder()
            .title("Plugins")
            .description("Enable or disable Tomate plugins")
            .build();

        let list_box = ListBox::builder()
            .selection_mode(Browse)
            .css_classes(vec!["boxed-list".to_string()])
            .build();

        let model = Arc::new(RwLock::new(ExtensionList::new()));

        let model_clone = model.clone();
        list_box.connect_row_selected(move |_, row| {
            if let Some(row) = row
                && let Ok(index) = usize::try_from(row.index())
            {
                model_clone.write().select(index);
            }
        });

        group.add(&list_box);
        widget.add(&group);

        debug!("ExtensionPreferencesPage: Created");

        Self {
            widget,
            list_box,
            model,
            services,
        }
    }

    /// Reloads all plugins from the plugin manager and rebuilds the list.
    ///
    /// The first row is selected when there is at least one plugin.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` if a plugin icon cannot be resolved or
    /// loaded. Rows built before the failure stay visible and the model is
    /// cut back to the same rows.
    pub fn refresh(&self) -> Result<(), PreferencesError> {
        let (mut result, rows) = {
            let mut model = self.model.write();
            let result = model.refresh(&self.services);
            (result, model.rows().to_vec())
        };

        let mut widgets = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match self.create_plugin_row(index, row) {
                Ok(widget) => widgets.push(widget),
                Err(e) => {
                    result = result.and(Err(e));
                    break;
                }
            }
        }

        let selected = {
            let mut model = self.model.write();
            model.truncate(widgets.len());
            model.select_first();
            model.selected()
        };

        self.list_box.remove_all();
        for widget in &widgets {
            self.list_box.append(widget);
        }

        if let Some(index) = selected
            && let Ok(index) = i32::try_from(index)
        {
            self.list_box
                .select_row(self.list_box.row_at_index(index).as_ref());
        }

        debug!("ExtensionPreferencesPage: Showing {} plugins", widgets.len());

        result
    }

    /// Creates the list row for one plugin.
    fn create_plugin_row(
        &self,
        index: usize,
        row: &PluginRow,
    ) -> Result<ListBoxRow, PreferencesError> {
        let texture =
            Texture::from_filename(&row.icon).map_err(|e| PreferencesError::ImageLoad {
                path: row.icon.clone(),
                reason: e.to_string(),
            })?;

        let row_container = GtkBox::builder()
            .orientation(Horizontal)
            .spacing(12)
            .margin_top(6)
            .margin_bottom(6)
            .margin_start(12)
            .margin_end(12)
            .build();

        let check_button = CheckButton::builder()
            .active(row.active)
            .valign(Center)
            .build();
        check_button.set_tooltip_text(Some(&row.name));
        row_container.append(&check_button);

        let icon = Image::from_paintable(Some(&texture));
        icon.set_pixel_size(PLUGIN_ICON_SIZE as i32);
        row_container.append(&icon);

        let detail = Label::builder()
            .label(&row.detail)
            .use_markup(true)
            .halign(Start)
            .xalign(0.0)
            .hexpand(true)
            .wrap(true)
            .build();
        row_container.append(&detail);

        let model = self.model.clone();
        let plugins = self.services.plugins.clone();
        check_button.connect_toggled(move |button| {
            let requested = button.is_active();
            let current = model.read().rows().get(index).map(|row| row.active);

            // Already in sync, e.g. after restoring a rejected toggle.
            if current == Some(requested) {
                return;
            }

            let result = model.write().toggle(index, plugins.as_ref());
            if let Err(e) = result {
                ErrorReporter::error(&Error::from(e), "Failed to toggle plugin");
                let restored = model.read().rows().get(index).is_some_and(|row| row.active);
                button.set_active(restored);
            }
        });

        let list_row = ListBoxRow::new();
        list_row.set_child(Some(&row_container));
        list_row.set_activatable(false);
        list_row.set_selectable(true);

        Ok(list_row)
    }
}
