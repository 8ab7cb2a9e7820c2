//! In-memory collaborators for unit tests.

use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use parking_lot::Mutex;

use crate::{
    config::{ConfigStore, DurationSetting, SettingsError, TIMER_SECTION},
    plugin::{PluginError, PluginInfo, PluginManager},
    services::Services,
};

/// Config store that records every write and icon lookup.
#[derive(Debug, Default)]
pub struct FakeConfig {
    values: Mutex<BTreeMap<(String, String), String>>,
    writes: Mutex<Vec<(String, String, String)>>,
    icon_lookups: Mutex<Vec<(String, u32)>>,
}

impl FakeConfig {
    pub fn with_durations(pomodoro: i32, short_break: i32, long_break: i32) -> Self {
        let config = Self::default();
        {
            let mut values = config.values.lock();
            for (setting, value) in DurationSetting::ALL
                .into_iter()
                .zip([pomodoro, short_break, long_break])
            {
                values.insert(
                    (TIMER_SECTION.to_string(), setting.key().to_string()),
                    value.to_string(),
                );
            }
        }
        config
    }

    pub fn writes(&self) -> Vec<(String, String, String)> {
        self.writes.lock().clone()
    }

    pub fn icon_lookups(&self) -> Vec<(String, u32)> {
        self.icon_lookups.lock().clone()
    }
}

impl ConfigStore for FakeConfig {
    fn get_int(&self, section: &str, key: &str) -> Result<i32, SettingsError> {
        self.values
            .lock()
            .get(&(section.to_string(), key.to_string()))
            .and_then(|value| value.parse().ok())
            .ok_or_else(|| SettingsError::MissingKey {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    fn set(&self, section: &str, key: &str, value: String) -> Result<(), SettingsError> {
        self.values
            .lock()
            .insert((section.to_string(), key.to_string()), value.clone());
        self.writes
            .lock()
            .push((section.to_string(), key.to_string(), value));
        Ok(())
    }

    fn get_icon_path(&self, name: &str, size: u32) -> Result<PathBuf, SettingsError> {
        self.icon_lookups.lock().push((name.to_string(), size));
        if name == "missing-icon" {
            return Err(SettingsError::IconNotFound {
                name: name.to_string(),
                size,
            });
        }
        Ok(PathBuf::from(format!("/icons/{size}/{name}.png")))
    }
}

/// Recorded plugin manager request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginCall {
    Activate(String),
    Deactivate(String),
}

/// Plugin manager that records calls and can be told to reject them.
#[derive(Debug, Default)]
pub struct FakePlugins {
    plugins: Mutex<Vec<PluginInfo>>,
    calls: Mutex<Vec<PluginCall>>,
    reject: Mutex<bool>,
}

impl FakePlugins {
    pub fn with_plugins(plugins: Vec<PluginInfo>) -> Self {
        Self {
            plugins: Mutex::new(plugins),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PluginCall> {
        self.calls.lock().clone()
    }

    pub fn reject_requests(&self) {
        *self.reject.lock() = true;
    }

    fn apply(&self, call: PluginCall) -> Result<(), PluginError> {
        self.calls.lock().push(call.clone());
        let (name, activated) = match call {
            PluginCall::Activate(name) => (name, true),
            PluginCall::Deactivate(name) => (name, false),
        };
        if *self.reject.lock() {
            return Err(PluginError::NotFound { name });
        }
        if let Some(plugin) = self
            .plugins
            .lock()
            .iter_mut()
            .find(|plugin| plugin.name == name)
        {
            plugin.is_activated = activated;
        }
        Ok(())
    }
}

impl PluginManager for FakePlugins {
    fn list_all_plugins(&self) -> Vec<PluginInfo> {
        self.plugins.lock().clone()
    }

    fn activate_by_name(&self, name: &str) -> Result<(), PluginError> {
        self.apply(PluginCall::Activate(name.to_string()))
    }

    fn deactivate_by_name(&self, name: &str) -> Result<(), PluginError> {
        self.apply(PluginCall::Deactivate(name.to_string()))
    }
}

pub fn plugin(name: &str, icon: Option<&str>, is_activated: bool) -> PluginInfo {
    PluginInfo {
        name: name.to_string(),
        version: "1.0".to_string(),
        description: format!("{name} plugin"),
        icon: icon.map(str::to_string),
        is_activated,
    }
}

pub fn services(config: &Arc<FakeConfig>, plugins: &Arc<FakePlugins>) -> Services {
    Services::new(config.clone(), plugins.clone())
}
