use std::collections::HashMap;

use secrecy::SecretString;
use tempdash_plugin_api::{
    ConfigSchema,
    PluginError,
    PluginResult,
};

pub(crate) struct WeatherbitConfig {
    pub api_key: SecretString,
    pub base_url: String,
}

pub(crate) fn parse_config(
    schema: &ConfigSchema, config: &HashMap<String, String>,
) -> PluginResult<WeatherbitConfig> {
    schema
        .validate(config)
        .map_err(|e| PluginError::InvalidConfig(format!("Weatherbit: {e}")))?;

    let api_key = config
        .get("token")
        .map(|t| SecretString::from(t.trim().to_string()))
        .ok_or_else(|| PluginError::InvalidConfig("Missing Weatherbit API key".to_string()))?;

    let base_url = schema
        .value_or_default(config, "base_url")
        .ok_or_else(|| PluginError::InvalidConfig("Missing base URL".to_string()))?
        .trim_end_matches('/')
        .to_string();

    Ok(WeatherbitConfig { api_key, base_url })
}
