use std::collections::BTreeMap;

use crate::plugin::{
    Plugin,
    PluginMetadata,
};

/// Built-in plugins keyed by provider type. Iteration is sorted by type.
#[derive(Default)]
pub struct PluginRegistry {
    by_type: BTreeMap<String, Box<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the plugin previously registered under the same type, if any
    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Option<Box<dyn Plugin>> {
        self.by_type.insert(plugin.provider_type().to_string(), plugin)
    }

    pub fn is_registered(&self, provider_type: &str) -> bool {
        self.by_type.contains_key(provider_type)
    }

    pub fn provider_types(&self) -> Vec<String> {
        self.by_type.keys().cloned().collect()
    }

    pub fn metadata(&self) -> Vec<PluginMetadata> {
        self.by_type
            .values()
            .map(|plugin| plugin.metadata().clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.by_type.len()
    }
}
