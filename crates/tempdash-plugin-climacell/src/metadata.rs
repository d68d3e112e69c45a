use tempdash_plugin_api::*;

use crate::client::DEFAULT_BASE_URL;
use crate::geocoder::DEFAULT_GEOCODER_BASE_URL;

pub fn create_metadata() -> PluginMetadata {
    PluginMetadata {
        name: "ClimaCell".to_string(),
        provider_type: "climacell".to_string(),
        version: "0.1.0".to_string(),
        description: "Realtime temperature from ClimaCell, located through OpenCage geocoding"
            .to_string(),
        author: Some("Tempdash Team".to_string()),
        icon: None,
        config_schema: create_config_schema(),
        native_unit: TemperatureUnit::Celsius,
    }
}

fn create_config_schema() -> ConfigSchema {
    ConfigSchema::new()
        .add_field(ConfigField {
            key: "token".to_string(),
            label: "API Key".to_string(),
            description: Some("ClimaCell API key".to_string()),
            field_type: ConfigFieldType::Password,
            required: true,
            default_value: None,
        })
        .add_field(ConfigField {
            key: "geocoder_token".to_string(),
            label: "OpenCage API Key".to_string(),
            description: Some("Used to turn city names into coordinates".to_string()),
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
        .add_field(ConfigField {
            key: "geocoder_base_url".to_string(),
            label: "Geocoder Base URL".to_string(),
            description: None,
            field_type: ConfigFieldType::Url,
            required: false,
            default_value: Some(DEFAULT_GEOCODER_BASE_URL.to_string()),
        })
}
