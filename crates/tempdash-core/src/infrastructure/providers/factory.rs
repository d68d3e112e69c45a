use std::sync::Arc;

use crate::domain::{
    DomainError,
    DomainResult,
    Provider,
};
use crate::infrastructure::config::{
    ProviderFileConfig,
    TempdashConfig,
};
use crate::infrastructure::providers::PluginAdapter;
use crate::infrastructure::HttpClientManager;
use crate::plugins;

/// Turns configured provider tables into initialized providers
pub struct ProviderFactory {
    http_client_manager: Arc<HttpClientManager>,
}

impl ProviderFactory {
    pub fn new(http_client_manager: Arc<HttpClientManager>) -> Self {
        Self {
            http_client_manager,
        }
    }

    /// Every enabled provider, in config file order
    pub fn build_all(&self, config: &TempdashConfig) -> DomainResult<Vec<Arc<dyn Provider>>> {
        let mut providers = Vec::with_capacity(config.providers.len());

        for (id, provider_config) in config.enabled_providers() {
            providers.push(self.build(id, provider_config)?);
        }

        Ok(providers)
    }

    pub fn build(&self, id: &str, config: &ProviderFileConfig) -> DomainResult<Arc<dyn Provider>> {
        let mut plugin = plugins::create_plugin(&config.provider_type)?;

        let mut plugin_config = config.config.clone();
        plugin_config.insert("token".to_string(), config.token.clone());

        let http_client = match plugin_config.get("base_url") {
            Some(base_url) => self.http_client_manager.client_for_url(base_url)?,
            None => self.http_client_manager.default_client(),
        };

        plugin
            .initialize(plugin_config, Some(http_client))
            .map_err(|e| {
                DomainError::InvalidConfig(format!(
                    "Failed to initialize provider '{}': {}",
                    config.display_name(id),
                    e
                ))
            })?;

        tracing::info!(
            provider_id = id,
            provider_type = %config.provider_type,
            "Provider initialized"
        );

        Ok(Arc::new(PluginAdapter::new(plugin)))
    }
}
