//! Shared services handed to the preference widgets.

use std::sync::Arc;

use crate::{config::ConfigStore, plugin::PluginManager};

/// Collaborators the preferences depend on, passed explicitly at
/// construction.
#[derive(Clone)]
pub struct Services {
    /// Sectioned settings store.
    pub config: Arc<dyn ConfigStore>,
    /// Plugin discovery and activation.
    pub plugins: Arc<dyn PluginManager>,
}

impl Services {
    /// Bundles the configuration store and plugin manager.
    pub fn new(config: Arc<dyn ConfigStore>, plugins: Arc<dyn PluginManager>) -> Self {
        Self { config, plugins }
    }
}
