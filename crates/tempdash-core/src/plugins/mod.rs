use tempdash_plugin_api::{
    Plugin as PluginTrait,
    PluginMetadata,
    PluginRegistry,
};

use crate::domain::{
    DomainError,
    DomainResult,
};

pub fn create_plugin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();

    tempdash_plugin_openweathermap::register(&mut registry);
    tempdash_plugin_weatherbit::register(&mut registry);
    tempdash_plugin_climacell::register(&mut registry);

    registry
}

pub fn get_all_plugin_metadata() -> Vec<PluginMetadata> {
    create_plugin_registry().metadata()
}

/// Fresh, uninitialized plugin for `provider_type`
pub fn create_plugin(provider_type: &str) -> DomainResult<Box<dyn PluginTrait>> {
    match provider_type {
        "openweathermap" => Ok(Box::new(
            tempdash_plugin_openweathermap::OpenWeatherMapPlugin::new(),
        )),
        "weatherbit" => Ok(Box::new(tempdash_plugin_weatherbit::WeatherbitPlugin::new())),
        "climacell" => Ok(Box::new(tempdash_plugin_climacell::ClimaCellPlugin::new())),
        other => Err(DomainError::InvalidProviderType(other.to_string())),
    }
}
