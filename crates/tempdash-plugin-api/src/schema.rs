use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::{
    PluginError,
    PluginResult,
};

/// Configuration field type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfigFieldType {
    /// Secret value (API key)
    Password,
    /// Base URL override
    Url,
}

/// A single configuration field definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigField {
    /// Field key (used in config HashMap)
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Field description/help text
    pub description: Option<String>,
    /// Field type
    pub field_type: ConfigFieldType,
    /// Whether the field is required
    pub required: bool,
    /// Default value
    pub default_value: Option<String>,
}

/// Complete configuration schema for a plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSchema {
    /// Schema fields
    pub fields: Vec<ConfigField>,
}

impl ConfigSchema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn add_field(mut self, field: ConfigField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, key: &str) -> Option<&ConfigField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Checks that every required field is present and non-blank
    pub fn validate(&self, config: &HashMap<String, String>) -> PluginResult<()> {
        let missing: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| {
                config
                    .get(&f.key)
                    .map(|v| v.trim().is_empty())
                    .unwrap_or(true)
            })
            .map(|f| f.key.as_str())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PluginError::InvalidConfig(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }

    /// Value for `key`, falling back to the field's default
    pub fn value_or_default(&self, config: &HashMap<String, String>, key: &str) -> Option<String> {
        config
            .get(key)
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .or_else(|| self.field(key).and_then(|f| f.default_value.clone()))
    }
}

impl Default for ConfigSchema {
    fn default() -> Self {
        Self::new()
    }
}
