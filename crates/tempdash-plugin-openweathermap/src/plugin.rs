//! OpenWeatherMap plugin implementation

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tempdash_plugin_api::utils::resolve_http_client;
use tempdash_plugin_api::*;

use crate::{
    client,
    config,
    mapper,
    metadata,
};

pub struct OpenWeatherMapPlugin {
    metadata: PluginMetadata,
    client: Option<client::OpenWeatherMapClient>,
}

impl Default for OpenWeatherMapPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenWeatherMapPlugin {
    pub fn new() -> Self {
        Self {
            metadata: metadata::create_metadata(),
            client: None,
        }
    }

    fn client(&self) -> PluginResult<&client::OpenWeatherMapClient> {
        self.client
            .as_ref()
            .ok_or_else(|| PluginError::Internal("Plugin not initialized".to_string()))
    }
}

#[async_trait]
impl Plugin for OpenWeatherMapPlugin {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    fn initialize(
        &mut self, config: HashMap<String, String>, http_client: Option<Arc<reqwest::Client>>,
    ) -> PluginResult<()> {
        let config = config::parse_config(&self.metadata.config_schema, &config)?;
        let http_client = resolve_http_client(http_client)?;

        self.client = Some(client::OpenWeatherMapClient::new(
            http_client,
            config.base_url,
            config.api_key,
        ));

        Ok(())
    }

    async fn measure(&self, city: &str) -> PluginResult<f64> {
        let client = self.client()?;
        let weather = client.fetch_current(city).await?;
        let kelvin = mapper::current_to_kelvin(&weather)?;

        tracing::info!(provider = "openweathermap", city, kelvin, "Measured temperature");
        Ok(kelvin)
    }
}
