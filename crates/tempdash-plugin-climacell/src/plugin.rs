//! ClimaCell plugin implementation

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tempdash_plugin_api::utils::resolve_http_client;
use tempdash_plugin_api::*;

use crate::{
    client,
    config,
    geocoder,
    mapper,
    metadata,
};

pub struct ClimaCellPlugin {
    metadata: PluginMetadata,
    client: Option<client::ClimaCellClient>,
    geocoder: Option<geocoder::Geocoder>,
}

impl Default for ClimaCellPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ClimaCellPlugin {
    pub fn new() -> Self {
        Self {
            metadata: metadata::create_metadata(),
            client: None,
            geocoder: None,
        }
    }

    fn initialized(&self) -> PluginResult<(&client::ClimaCellClient, &geocoder::Geocoder)> {
        match (&self.client, &self.geocoder) {
            (Some(client), Some(geocoder)) => Ok((client, geocoder)),
            _ => Err(PluginError::Internal("Plugin not initialized".to_string())),
        }
    }
}

#[async_trait]
impl Plugin for ClimaCellPlugin {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    fn initialize(
        &mut self, config: HashMap<String, String>, http_client: Option<Arc<reqwest::Client>>,
    ) -> PluginResult<()> {
        let config = config::parse_config(&self.metadata.config_schema, &config)?;
        let http_client = resolve_http_client(http_client)?;

        self.geocoder = Some(geocoder::Geocoder::new(
            Arc::clone(&http_client),
            config.geocoder_base_url,
            config.geocoder_key,
        ));
        self.client = Some(client::ClimaCellClient::new(
            http_client,
            config.base_url,
            config.api_key,
        ));

        Ok(())
    }

    async fn measure(&self, city: &str) -> PluginResult<f64> {
        let (client, geocoder) = self.initialized()?;

        let geometry = geocoder.locate(city).await?;
        let realtime = client.fetch_realtime(geometry).await?;
        let kelvin = mapper::realtime_to_kelvin(&realtime)?;

        tracing::info!(provider = "climacell", city, kelvin, "Measured temperature");
        Ok(kelvin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_measure_requires_initialization() {
        let plugin = ClimaCellPlugin::new();
        assert!(matches!(
            plugin.measure("Paris").await,
            Err(PluginError::Internal(_))
        ));
    }

    #[test]
    fn test_failed_initialize_leaves_plugin_uninitialized() {
        let mut plugin = ClimaCellPlugin::new();
        let config = HashMap::from([("token".to_string(), "cc-key".to_string())]);

        assert!(plugin.initialize(config, None).is_err());
        assert!(plugin.initialized().is_err());
    }

    #[test]
    fn test_metadata_declares_celsius() {
        let plugin = ClimaCellPlugin::new();
        assert_eq!(plugin.provider_type(), "climacell");
        assert_eq!(plugin.metadata().native_unit, TemperatureUnit::Celsius);
        assert_eq!(plugin.metadata().config_schema.fields.len(), 4);
    }
}
