use std::sync::Arc;

use async_trait::async_trait;
use tempdash_plugin_api::{
    Plugin as PluginTrait,
    PluginError,
};

use crate::domain::{
    DomainError,
    DomainResult,
    Provider,
};

/// Exposes a plugin as a domain [`Provider`], collapsing its error causes
/// into a single provider failure.
pub struct PluginAdapter {
    plugin: Arc<dyn PluginTrait>,
    provider_type: String,
}

impl PluginAdapter {
    pub fn new(plugin: Box<dyn PluginTrait>) -> Self {
        let provider_type = plugin.provider_type().to_string();
        Self {
            plugin: Arc::from(plugin),
            provider_type,
        }
    }

    fn map_error(&self, key: &str, e: PluginError) -> DomainError {
        tracing::warn!(
            provider = %self.provider_type,
            city = key,
            error = %e,
            "Provider measurement failed"
        );
        DomainError::ProviderFailure(format!("{}: {}", self.provider_type, e))
    }
}

#[async_trait]
impl Provider for PluginAdapter {
    async fn measure(&self, key: &str) -> DomainResult<f64> {
        self.plugin
            .measure(key)
            .await
            .map_err(|e| self.map_error(key, e))
    }

    fn provider_type(&self) -> &str {
        &self.provider_type
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tempdash_plugin_api::{
        ConfigSchema,
        PluginMetadata,
        PluginResult,
        TemperatureUnit,
    };

    use super::*;

    struct CannedPlugin {
        metadata: PluginMetadata,
        reading: fn() -> PluginResult<f64>,
    }

    impl CannedPlugin {
        fn boxed(reading: fn() -> PluginResult<f64>) -> Box<dyn PluginTrait> {
            Box::new(Self {
                metadata: PluginMetadata {
                    name: "Canned".to_string(),
                    provider_type: "canned".to_string(),
                    version: "0.1.0".to_string(),
                    description: String::new(),
                    author: None,
                    icon: None,
                    config_schema: ConfigSchema::new(),
                    native_unit: TemperatureUnit::Kelvin,
                },
                reading,
            })
        }
    }

    #[async_trait]
    impl PluginTrait for CannedPlugin {
        fn metadata(&self) -> &PluginMetadata {
            &self.metadata
        }

        fn initialize(
            &mut self, _config: HashMap<String, String>,
            _http_client: Option<Arc<reqwest::Client>>,
        ) -> PluginResult<()> {
            Ok(())
        }

        async fn measure(&self, _city: &str) -> PluginResult<f64> {
            (self.reading)()
        }
    }

    #[tokio::test]
    async fn test_measurement_passes_through() {
        let adapter = PluginAdapter::new(CannedPlugin::boxed(|| Ok(288.15)));
        assert_eq!(adapter.provider_type(), "canned");
        assert_eq!(adapter.measure("Paris").await.unwrap(), 288.15);
    }

    #[tokio::test]
    async fn test_every_plugin_error_becomes_provider_failure() {
        let failures: [fn() -> PluginResult<f64>; 4] = [
            || Err(PluginError::NetworkError("connection refused".to_string())),
            || Err(PluginError::ApiError("HTTP 401".to_string())),
            || Err(PluginError::SerializationError("missing field `main`".to_string())),
            || Err(PluginError::NoData("no observations".to_string())),
        ];

        for reading in failures {
            let adapter = PluginAdapter::new(CannedPlugin::boxed(reading));
            match adapter.measure("Paris").await {
                Err(DomainError::ProviderFailure(msg)) => assert!(msg.starts_with("canned: ")),
                other => panic!("expected provider failure, got {other:?}"),
            }
        }
    }
}
