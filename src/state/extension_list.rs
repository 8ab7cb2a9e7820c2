//! Ordered plugin rows backing the Extensions page.
//!
//! `ExtensionList` owns the row data; the Libadwaita page only renders a
//! snapshot of it after each refresh.

use std::path::PathBuf;

use {libadwaita::glib::markup_escape_text, tracing::debug};

use crate::{
    config::ConfigStore,
    error::PreferencesError,
    plugin::{PluginInfo, PluginManager},
    services::Services,
};

/// Pixel size of plugin icons in the list.
pub const PLUGIN_ICON_SIZE: u32 = 16;

/// Display and toggle state of one discovered plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRow {
    /// Whether the plugin is active.
    pub active: bool,
    /// Resolved icon file.
    pub icon: PathBuf,
    /// Plugin name, used for activation requests.
    pub name: String,
    /// Two-line Pango markup with name, version, and description.
    pub detail: String,
    /// Metadata the row was built from.
    pub plugin: PluginInfo,
}

impl PluginRow {
    /// Builds a row, resolving the plugin icon through the config store.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError::Settings` if the icon cannot be resolved.
    pub fn new(plugin: PluginInfo, config: &dyn ConfigStore) -> Result<Self, PreferencesError> {
        let icon = config.get_icon_path(plugin.icon_name(), PLUGIN_ICON_SIZE)?;

        Ok(Self {
            active: plugin.is_activated,
            icon,
            name: plugin.name.clone(),
            detail: detail_markup(&plugin),
            plugin,
        })
    }
}

/// Bold name and version over a small description.
#[must_use]
pub fn detail_markup(plugin: &PluginInfo) -> String {
    format!(
        "<b>{}</b> ({})\n<small>{}</small>",
        markup_escape_text(&plugin.name),
        markup_escape_text(&plugin.version),
        markup_escape_text(&plugin.description),
    )
}

/// Plugin rows in discovery order plus the selected row.
#[derive(Debug, Clone, Default)]
pub struct ExtensionList {
    rows: Vec<PluginRow>,
    selected: Option<usize>,
}

impl ExtensionList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[PluginRow] {
        &self.rows
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Removes every row and the selection.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.selected = None;
    }

    /// Rebuilds the rows from the plugin manager and selects the first one.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` if a plugin icon cannot be resolved. Rows
    /// added before the failure are kept.
    pub fn refresh(&mut self, services: &Services) -> Result<(), PreferencesError> {
        self.clear();

        for plugin in services.plugins.list_all_plugins() {
            self.add_plugin(plugin, services.config.as_ref())?;
        }

        if !self.is_empty() {
            self.select_first();
        }

        Ok(())
    }

    /// Appends a row for `plugin`.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` if the plugin icon cannot be resolved.
    pub fn add_plugin(
        &mut self,
        plugin: PluginInfo,
        config: &dyn ConfigStore,
    ) -> Result<(), PreferencesError> {
        let row = PluginRow::new(plugin, config)?;
        debug!("plugin {} added", row.name);
        self.rows.push(row);
        Ok(())
    }

    /// Keeps only the first `len` rows, dropping a selection past the end.
    pub fn truncate(&mut self, len: usize) {
        self.rows.truncate(len);
        if self.selected.is_some_and(|index| index >= len) {
            self.select_first();
        }
    }

    pub fn select_first(&mut self) {
        self.selected = (!self.rows.is_empty()).then_some(0);
    }

    /// Selects `index` if it names a row.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.rows.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Flips the row's active flag and forwards it to the plugin manager.
    ///
    /// Activates by name when the row becomes active and deactivates
    /// otherwise. If the plugin manager rejects the request the flag is
    /// restored, so the row keeps mirroring the manager.
    ///
    /// # Returns
    ///
    /// The new active flag.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` if `index` is out of range or the plugin
    /// manager fails.
    pub fn toggle(
        &mut self,
        index: usize,
        plugins: &dyn PluginManager,
    ) -> Result<bool, PreferencesError> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(PreferencesError::RowOutOfRange { index, len })?;

        row.active = !row.active;

        let result = if row.active {
            plugins.activate_by_name(&row.name)
        } else {
            plugins.deactivate_by_name(&row.name)
        };

        if let Err(error) = result {
            row.active = !row.active;
            return Err(error.into());
        }

        row.plugin.is_activated = row.active;
        debug!(plugin = %row.name, active = row.active, "Plugin toggled");

        Ok(row.active)
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::Arc};

    use crate::{
        error::PreferencesError,
        plugin::{DEFAULT_ICON_NAME, PluginManager},
        state::extension_list::{ExtensionList, PLUGIN_ICON_SIZE, detail_markup},
        testing::{FakeConfig, FakePlugins, PluginCall, plugin, services},
    };

    fn assert_rows_mirror_plugins(list: &ExtensionList, plugins: &dyn PluginManager) {
        let infos = plugins.list_all_plugins();
        assert_eq!(infos.len(), list.rows().len());
        for (info, row) in infos.iter().zip(list.rows()) {
            assert_eq!(info.is_activated, row.active, "plugin {}", info.name);
        }
    }

    #[test]
    fn test_refresh_without_plugins_selects_nothing() {
        let config = Arc::new(FakeConfig::default());
        let plugins = Arc::new(FakePlugins::default());
        let mut list = ExtensionList::new();

        list.refresh(&services(&config, &plugins)).unwrap();

        assert!(list.is_empty());
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_refresh_keeps_discovery_order_and_selects_first() {
        let config = Arc::new(FakeConfig::default());
        let plugins = Arc::new(FakePlugins::with_plugins(vec![
            plugin("Zeta", None, false),
            plugin("Alpha", Some("alarm"), true),
            plugin("Mu", None, false),
        ]));
        let mut list = ExtensionList::new();

        list.refresh(&services(&config, &plugins)).unwrap();

        let names: Vec<&str> = list.rows().iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
        assert_eq!(list.selected(), Some(0));
        assert!(list.rows()[1].active);
        assert_eq!(list.rows()[1].icon, PathBuf::from("/icons/16/alarm.png"));
    }

    #[test]
    fn test_refresh_replaces_previous_rows() {
        let config = Arc::new(FakeConfig::default());
        let plugins = Arc::new(FakePlugins::with_plugins(vec![plugin("Alarm", None, false)]));
        let mut list = ExtensionList::new();
        let services = services(&config, &plugins);

        list.refresh(&services).unwrap();
        list.refresh(&services).unwrap();

        assert_eq!(list.rows().len(), 1);
    }

    #[test]
    fn test_missing_icon_uses_default_name() {
        let config = Arc::new(FakeConfig::default());
        let plugins = Arc::new(FakePlugins::with_plugins(vec![plugin("Alarm", None, false)]));
        let mut list = ExtensionList::new();

        list.refresh(&services(&config, &plugins)).unwrap();

        assert_eq!(
            config.icon_lookups(),
            vec![(DEFAULT_ICON_NAME.to_string(), PLUGIN_ICON_SIZE)]
        );
    }

    #[test]
    fn test_unresolvable_icon_fails_refresh() {
        let config = Arc::new(FakeConfig::default());
        let plugins = Arc::new(FakePlugins::with_plugins(vec![plugin(
            "Alarm",
            Some("missing-icon"),
            false,
        )]));
        let mut list = ExtensionList::new();

        let result = list.refresh(&services(&config, &plugins));

        assert!(matches!(result, Err(PreferencesError::Settings(_))));
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle_activates_and_deactivates_by_name() {
        let config = Arc::new(FakeConfig::default());
        let plugins = Arc::new(FakePlugins::with_plugins(vec![
            plugin("Alarm", None, false),
            plugin("Notify", None, true),
        ]));
        let mut list = ExtensionList::new();
        list.refresh(&services(&config, &plugins)).unwrap();

        assert!(list.toggle(0, plugins.as_ref()).unwrap());
        assert!(list.rows()[0].active);
        assert_rows_mirror_plugins(&list, plugins.as_ref());

        assert!(!list.toggle(1, plugins.as_ref()).unwrap());
        assert!(!list.rows()[1].active);
        assert_rows_mirror_plugins(&list, plugins.as_ref());

        assert_eq!(
            plugins.calls(),
            vec![
                PluginCall::Activate("Alarm".to_string()),
                PluginCall::Deactivate("Notify".to_string()),
            ]
        );
    }

    #[test]
    fn test_failed_toggle_restores_flag() {
        let config = Arc::new(FakeConfig::default());
        let plugins = Arc::new(FakePlugins::with_plugins(vec![plugin("Alarm", None, false)]));
        let mut list = ExtensionList::new();
        list.refresh(&services(&config, &plugins)).unwrap();
        plugins.reject_requests();

        let result = list.toggle(0, plugins.as_ref());

        assert!(matches!(result, Err(PreferencesError::Plugin(_))));
        assert!(!list.rows()[0].active);
        assert_rows_mirror_plugins(&list, plugins.as_ref());
        assert_eq!(plugins.calls(), vec![PluginCall::Activate("Alarm".to_string())]);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let plugins = FakePlugins::default();
        let mut list = ExtensionList::new();

        assert!(matches!(
            list.toggle(0, &plugins),
            Err(PreferencesError::RowOutOfRange { index: 0, len: 0 })
        ));
        assert!(plugins.calls().is_empty());
    }

    #[test]
    fn test_truncate_keeps_selection_inside_rows() {
        let config = Arc::new(FakeConfig::default());
        let plugins = Arc::new(FakePlugins::with_plugins(vec![
            plugin("Alarm", None, false),
            plugin("Notify", None, false),
            plugin("Stats", None, false),
        ]));
        let mut list = ExtensionList::new();
        list.refresh(&services(&config, &plugins)).unwrap();

        list.truncate(2);
        assert_eq!(list.rows().len(), 2);
        assert_eq!(list.selected(), Some(0));

        assert!(list.select(1));
        list.truncate(1);
        assert_eq!(list.selected(), Some(0));

        list.truncate(0);
        assert!(list.is_empty());
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_select_rejects_unknown_rows() {
        let config = Arc::new(FakeConfig::default());
        let plugins = Arc::new(FakePlugins::with_plugins(vec![
            plugin("Alarm", None, false),
            plugin("Notify", None, false),
        ]));
        let mut list = ExtensionList::new();
        list.refresh(&services(&config, &plugins)).unwrap();

        assert!(list.select(1));
        assert!(!list.select(2));
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn test_detail_markup_escapes_text() {
        let mut info = plugin("A&B", None, false);
        info.description = "<fast>".to_string();

        assert_eq!(
            detail_markup(&info),
            "<b>A&amp;B</b> (1.0)\n<small>&lt;fast&gt;</small>"
        );
    }
}
