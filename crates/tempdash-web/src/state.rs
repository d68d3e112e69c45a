use std::sync::Arc;

use tempdash_core::{
    CoreContext,
    PluginMetadata,
    WeatherService,
};

#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
    pub plugins: Arc<Vec<PluginMetadata>>,
}

impl AppState {
    pub fn new(core: &CoreContext) -> Self {
        Self {
            weather_service: Arc::clone(&core.weather_service),
            plugins: Arc::new(core.plugin_metadata()),
        }
    }

    #[cfg(test)]
    pub fn with_service(weather_service: WeatherService) -> Self {
        Self {
            weather_service: Arc::new(weather_service),
            plugins: Arc::new(tempdash_core::plugins::get_all_plugin_metadata()),
        }
    }
}
