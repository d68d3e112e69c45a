use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

use super::token_ref::{
    TokenRefError,
    TokenReference,
};
use super::validation::{
    ConfigValidator,
    ValidationResult,
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_CORS_ALLOW_ALL: bool = false;
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TempdashConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub providers: IndexMap<String, ProviderFileConfig>,
}

impl TempdashConfig {
    pub fn validate(&self) -> ValidationResult {
        ConfigValidator::validate(self)
    }

    pub fn enabled_providers(&self) -> impl Iterator<Item = (&String, &ProviderFileConfig)> {
        self.providers.iter().filter(|(_, p)| p.enabled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Deadline for a single provider call; 0 disables it
    #[serde(default = "default_provider_timeout_secs")]
    pub provider_timeout_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            provider_timeout_secs: default_provider_timeout_secs(),
        }
    }
}

impl GeneralConfig {
    pub fn provider_timeout(&self) -> Option<Duration> {
        match self.provider_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

fn default_provider_timeout_secs() -> u64 {
    DEFAULT_PROVIDER_TIMEOUT_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_cors_allow_all")]
    pub cors_allow_all: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cors_allow_all: default_cors_allow_all(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr.parse()
    }
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_cors_allow_all() -> bool {
    DEFAULT_CORS_ALLOW_ALL
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderFileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default)]
    pub provider_type: String,

    #[serde(default)]
    pub token: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Plugin-specific settings such as `base_url` or `geocoder_token`
    #[serde(default)]
    pub config: HashMap<String, String>,
}

impl Default for ProviderFileConfig {
    fn default() -> Self {
        Self {
            name: None,
            provider_type: String::new(),
            token: String::new(),
            enabled: default_enabled(),
            config: HashMap::new(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

impl ProviderFileConfig {
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(id)
    }

    pub fn token_reference(&self) -> Result<TokenReference, TokenRefError> {
        TokenReference::parse(&self.token)
    }
}

/// `config` entries holding secondary credentials, such as ClimaCell's
/// `geocoder_token`. They follow the same reference rules as `token`.
pub(crate) fn is_credential_key(key: &str) -> bool {
    key.ends_with("token") || key.ends_with("key")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TempdashConfig::default();

        assert_eq!(config.server.bind_addr, "0.0.0.0:3000");
        assert!(!config.server.cors_allow_all);
        assert_eq!(config.general.provider_timeout(), Some(Duration::from_secs(10)));
        assert!(config.providers.is_empty());
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        let general = GeneralConfig {
            provider_timeout_secs: 0,
        };
        assert_eq!(general.provider_timeout(), None);
    }

    #[test]
    fn test_provider_table_order_preserved() {
        let config: TempdashConfig = toml::from_str(
            r#"
            [providers.weatherbit]
            type = "weatherbit"

            [providers.openweathermap]
            type = "openweathermap"

            [providers.climacell]
            type = "climacell"
            enabled = false
            config = { geocoder_token = "${OPENCAGE_API_KEY}" }
            "#,
        )
        .unwrap();

        let ids: Vec<_> = config.providers.keys().cloned().collect();
        assert_eq!(ids, vec!["weatherbit", "openweathermap", "climacell"]);

        let enabled: Vec<_> = config.enabled_providers().map(|(id, _)| id.as_str()).collect();
        assert_eq!(enabled, vec!["weatherbit", "openweathermap"]);
        assert_eq!(
            config.providers["climacell"].config["geocoder_token"],
            "${OPENCAGE_API_KEY}"
        );
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let mut provider = ProviderFileConfig::default();
        assert_eq!(provider.display_name("owm"), "owm");

        provider.name = Some("OpenWeatherMap".to_string());
        assert_eq!(provider.display_name("owm"), "OpenWeatherMap");
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig::default();
        assert_eq!(server.socket_addr().unwrap().port(), 3000);
    }
}
