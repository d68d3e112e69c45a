pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod plugins;

use std::sync::Arc;

pub use application::{
    Aggregator,
    WeatherService,
};
pub use domain::{
    AggregationResult,
    CityTemperature,
    DomainError,
    DomainResult,
    Outcome,
    Provider,
};
pub use infrastructure::{
    ConfigLoader,
    HttpClientManager,
    ProviderFactory,
    TempdashConfig,
};
pub use tempdash_plugin_api::PluginMetadata;

pub struct CoreContext {
    pub config: TempdashConfig,

    pub http_client_manager: Arc<HttpClientManager>,

    pub weather_service: Arc<WeatherService>,
}

impl CoreContext {
    pub fn new(config: TempdashConfig) -> anyhow::Result<Self> {
        let http_client_manager = Arc::new(HttpClientManager::new()?);

        let factory = ProviderFactory::new(Arc::clone(&http_client_manager));
        let providers = factory.build_all(&config)?;

        Ok(Self::with_providers(config, http_client_manager, providers))
    }

    pub fn with_providers(
        config: TempdashConfig, http_client_manager: Arc<HttpClientManager>,
        providers: Vec<Arc<dyn Provider>>,
    ) -> Self {
        if providers.is_empty() {
            tracing::warn!("No providers configured, every weather query will fail");
        }

        let aggregator =
            Aggregator::new(providers).with_provider_timeout(config.general.provider_timeout());
        let weather_service = Arc::new(WeatherService::new(aggregator));

        tracing::info!(
            providers = ?weather_service.provider_types(),
            provider_timeout_secs = config.general.provider_timeout_secs,
            "Core context initialized"
        );

        Self {
            config,
            http_client_manager,
            weather_service,
        }
    }

    pub fn plugin_metadata(&self) -> Vec<PluginMetadata> {
        plugins::get_all_plugin_metadata()
    }
}
