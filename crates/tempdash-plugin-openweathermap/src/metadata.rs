use tempdash_plugin_api::*;

use crate::client::DEFAULT_BASE_URL;

pub fn create_metadata() -> PluginMetadata {
    PluginMetadata {
        name: "OpenWeatherMap".to_string(),
        provider_type: "openweathermap".to_string(),
        version: "0.1.0".to_string(),
        description: "Current temperature from the OpenWeatherMap weather API".to_string(),
        author: Some("Tempdash Team".to_string()),
        icon: Some("https://openweathermap.org/favicon.ico".to_string()),
        config_schema: create_config_schema(),
        native_unit: TemperatureUnit::Kelvin,
    }
}

fn create_config_schema() -> ConfigSchema {
    ConfigSchema::new()
        .add_field(ConfigField {
            key: "token".to_string(),
            label: "API Key".to_string(),
            description: Some("OpenWeatherMap APPID".to_string()),
            field_type: ConfigFieldType::Password,
            required: true,
            default_value: None,
        })
        .add_field(ConfigField {
            key: "base_url".to_string(),
            label: "Base URL".to_string(),
            description: None,
            field_type: ConfigFieldType::Url,
            required: false,
            default_value: Some(DEFAULT_BASE_URL.to_string()),
        })
}
