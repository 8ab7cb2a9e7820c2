//! Descriptor-based plugin discovery with in-memory activation state.
//!
//! Each plugin directory holds `*.plugin.json` descriptors. Directories are
//! scanned in the given order and descriptors within a directory in file
//! name order, which together define the discovery order.

use std::{
    fs::{read_dir, read_to_string},
    path::{Path, PathBuf},
};

use {
    parking_lot::RwLock,
    serde::Deserialize,
    serde_json::from_str,
    tracing::{debug, info},
};

use crate::{
    config::get_xdg_data_home,
    plugin::{
        info::PluginInfo,
        manager::{PluginError, PluginManager},
    },
};

/// File name suffix of plugin descriptors.
pub const DESCRIPTOR_SUFFIX: &str = ".plugin.json";

/// On-disk plugin descriptor.
#[derive(Debug, Deserialize)]
struct PluginDescriptor {
    name: String,
    version: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: Option<String>,
}

/// Plugin manager backed by descriptor files.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: RwLock<Vec<PluginInfo>>,
}

impl PluginRegistry {
    /// Creates a registry from already known plugins.
    #[must_use]
    pub fn from_plugins(plugins: Vec<PluginInfo>) -> Self {
        Self {
            plugins: RwLock::new(plugins),
        }
    }

    /// Scans the given directories for plugin descriptors.
    ///
    /// Missing directories are skipped. When two descriptors share a name
    /// the first one discovered wins.
    ///
    /// # Errors
    ///
    /// Returns `PluginError` if a directory cannot be read or a descriptor
    /// cannot be parsed.
    pub fn discover(dirs: &[PathBuf]) -> Result<Self, PluginError> {
        let mut plugins: Vec<PluginInfo> = Vec::new();

        for dir in dirs {
            if !dir.is_dir() {
                debug!("Skipping missing plugin directory: {:?}", dir);
                continue;
            }

            for path in descriptor_paths(dir)? {
                let plugin = load_descriptor(&path)?;
                if plugins.iter().any(|known| known.name == plugin.name) {
                    debug!("Ignoring duplicate plugin {} at {:?}", plugin.name, path);
                    continue;
                }
                plugins.push(plugin);
            }
        }

        info!("Discovered {} plugins", plugins.len());

        Ok(Self::from_plugins(plugins))
    }

    fn set_activated(&self, name: &str, activated: bool) -> Result<(), PluginError> {
        let mut plugins = self.plugins.write();
        let plugin = plugins
            .iter_mut()
            .find(|plugin| plugin.name == name)
            .ok_or_else(|| PluginError::NotFound {
                name: name.to_string(),
            })?;

        plugin.is_activated = activated;
        debug!(plugin = name, activated, "Plugin activation changed");

        Ok(())
    }
}

impl PluginManager for PluginRegistry {
    fn list_all_plugins(&self) -> Vec<PluginInfo> {
        self.plugins.read().clone()
    }

    fn activate_by_name(&self, name: &str) -> Result<(), PluginError> {
        self.set_activated(name, true)
    }

    fn deactivate_by_name(&self, name: &str) -> Result<(), PluginError> {
        self.set_activated(name, false)
    }
}

/// Default plugin directory, `tomate/plugins` under the XDG data home.
#[must_use]
pub fn default_plugin_dirs() -> Vec<PathBuf> {
    vec![get_xdg_data_home().join("tomate").join("plugins")]
}

fn descriptor_paths(dir: &Path) -> Result<Vec<PathBuf>, PluginError> {
    let mut paths = Vec::new();
    for entry in read_dir(dir)? {
        let path = entry?.path();
        let is_descriptor = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(DESCRIPTOR_SUFFIX));
        if is_descriptor && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn load_descriptor(path: &Path) -> Result<PluginInfo, PluginError> {
    let contents = read_to_string(path)?;
    let descriptor: PluginDescriptor =
        from_str(&contents).map_err(|source| PluginError::InvalidDescriptor {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(PluginInfo {
        name: descriptor.name,
        version: descriptor.version,
        description: descriptor.description,
        icon: descriptor.icon,
        is_activated: false,
    })
}
