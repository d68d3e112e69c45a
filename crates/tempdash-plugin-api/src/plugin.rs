use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::PluginResult;
use crate::schema::ConfigSchema;
use crate::units::TemperatureUnit;

/// Plugin metadata - describes the plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Plugin name (e.g., "OpenWeatherMap")
    pub name: String,
    /// Plugin identifier (e.g., "openweathermap")
    pub provider_type: String,
    /// Plugin version
    pub version: String,
    /// Plugin description
    pub description: String,
    /// Plugin author
    pub author: Option<String>,
    /// Plugin icon (URL or identifier)
    pub icon: Option<String>,
    /// Configuration schema for credentials and options
    pub config_schema: ConfigSchema,
    /// Unit the upstream API reports in, before conversion to Kelvin
    pub native_unit: TemperatureUnit,
}

/// Main plugin trait - all weather providers must implement this
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Get plugin metadata
    fn metadata(&self) -> &PluginMetadata;

    /// Initialize plugin with configuration and an optional shared HTTP client
    fn initialize(
        &mut self, config: HashMap<String, String>, http_client: Option<Arc<reqwest::Client>>,
    ) -> PluginResult<()>;

    /// Current temperature for `city`, in Kelvin
    async fn measure(&self, city: &str) -> PluginResult<f64>;

    /// Get the provider type string
    fn provider_type(&self) -> &str {
        &self.metadata().provider_type
    }
}
