use std::collections::HashMap;

use secrecy::SecretString;
use tempdash_plugin_api::{
    ConfigSchema,
    PluginError,
    PluginResult,
};

pub(crate) struct OpenWeatherMapConfig {
    pub api_key: SecretString,
    pub base_url: String,
}

pub(crate) fn parse_config(
    schema: &ConfigSchema, config: &HashMap<String, String>,
) -> PluginResult<OpenWeatherMapConfig> {
    schema
        .validate(config)
        .map_err(|e| PluginError::InvalidConfig(format!("OpenWeatherMap: {e}")))?;

    let api_key = config
        .get("token")
        .map(|t| SecretString::from(t.trim().to_string()))
        .ok_or_else(|| PluginError::InvalidConfig("Missing OpenWeatherMap API key".to_string()))?;

    let base_url = schema
        .value_or_default(config, "base_url")
        .ok_or_else(|| PluginError::InvalidConfig("Missing base URL".to_string()))?
        .trim_end_matches('/')
        .to_string();

    Ok(OpenWeatherMapConfig { api_key, base_url })
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;
    use crate::client::DEFAULT_BASE_URL;
    use crate::metadata::create_metadata;

    #[test]
    fn test_parse_config_defaults_base_url() {
        let schema = create_metadata().config_schema;
        let config = HashMap::from([("token".to_string(), " key123 ".to_string())]);

        let parsed = parse_config(&schema, &config).unwrap();
        assert_eq!(parsed.api_key.expose_secret(), "key123");
        assert_eq!(parsed.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_parse_config_custom_base_url() {
        let schema = create_metadata().config_schema;
        let config = HashMap::from([
            ("token".to_string(), "key123".to_string()),
            ("base_url".to_string(), "http://localhost:8081/".to_string()),
        ]);

        let parsed = parse_config(&schema, &config).unwrap();
        assert_eq!(parsed.base_url, "http://localhost:8081");
    }

    #[test]
    fn test_parse_config_requires_token() {
        let schema = create_metadata().config_schema;
        let result = parse_config(&schema, &HashMap::new());
        assert!(matches!(result, Err(PluginError::InvalidConfig(_))));
    }
}
