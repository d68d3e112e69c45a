//! Weatherbit plugin implementation

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

pub struct WeatherbitPlugin {
    metadata: PluginMetadata,
    client: Option<client::WeatherbitClient>,
}

impl Default for WeatherbitPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherbitPlugin {
    pub fn new() -> Self {
        Self {
            metadata: metadata::create_metadata(),
            client: None,
        }
    }

    fn client(&self) -> PluginResult<&client::WeatherbitClient> {
        self.client
            .as_ref()
            .ok_or_else(|| PluginError::Internal("Plugin not initialized".to_string()))
    }
}

#[async_trait]
impl Plugin for WeatherbitPlugin {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    fn initialize(
        &mut self, config: HashMap<String, String>, http_client: Option<Arc<reqwest::Client>>,
    ) -> PluginResult<()> {
        let config = config::parse_config(&self.metadata.config_schema, &config)?;
        let http_client = resolve_http_client(http_client)?;

        self.client = Some(client::WeatherbitClient::new(
            http_client,
            config.base_url,
            config.api_key,
        ));

        Ok(())
    }

    async fn measure(&self, city: &str) -> PluginResult<f64> {
        let client = self.client()?;
        let observations = client.fetch_current(city).await?;
        let kelvin = mapper::observations_to_kelvin(&observations, city)?;

        tracing::info!(provider = "weatherbit", city, kelvin, "Measured temperature");
        Ok(kelvin)
    }
}
