use std::collections::HashMap;

use secrecy::SecretString;
use tempdash_plugin_api::{
    ConfigSchema,
    PluginError,
    PluginResult,
};

#[derive(Debug)]
pub(crate) struct ClimaCellConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub geocoder_key: SecretString,
    pub geocoder_base_url: String,
}

pub(crate) fn parse_config(
    schema: &ConfigSchema, config: &HashMap<String, String>,
) -> PluginResult<ClimaCellConfig> {
    schema
        .validate(config)
        .map_err(|e| PluginError::InvalidConfig(format!("ClimaCell: {e}")))?;

    Ok(ClimaCellConfig {
        api_key: secret(config, "token")?,
        base_url: url(schema, config, "base_url")?,
        geocoder_key: secret(config, "geocoder_token")?,
        geocoder_base_url: url(schema, config, "geocoder_base_url")?,
    })
}

fn secret(config: &HashMap<String, String>, key: &str) -> PluginResult<SecretString> {
    config
        .get(key)
        .map(|v| SecretString::from(v.trim().to_string()))
        .ok_or_else(|| PluginError::InvalidConfig(format!("Missing {key}")))
}

fn url(schema: &ConfigSchema, config: &HashMap<String, String>, key: &str) -> PluginResult<String> {
    schema
        .value_or_default(config, key)
        .map(|u| u.trim_end_matches('/').to_string())
        .ok_or_else(|| PluginError::InvalidConfig(format!("Missing {key}")))
}
