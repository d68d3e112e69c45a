use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use super::interpolation::{
    has_variables,
    interpolate_toml,
    InterpolationError,
};
use super::schema::{
    is_credential_key,
    TempdashConfig,
};
use super::token_ref::{
    TokenRefError,
    TokenReference,
};

pub const ENV_CONFIG_PATH: &str = "TEMPDASH_CONFIG_PATH";
pub const ENV_BIND_ADDR: &str = "TEMPDASH_BIND_ADDR";
pub const ENV_PROVIDER_TIMEOUT_SECS: &str = "TEMPDASH_PROVIDER_TIMEOUT_SECS";

const LOCAL_CONFIG_FILE: &str = "tempdash.toml";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] InterpolationError),

    #[error("Token reference error: {0}")]
    TokenRef(#[from] TokenRefError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ConfigLoadResult<T> = Result<T, ConfigLoadError>;

pub struct ConfigLoader;

impl ConfigLoader {
    /// `TEMPDASH_CONFIG_PATH`, then `./tempdash.toml`, then the user config
    /// directory. `None` when no candidate file exists.
    pub fn discover_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
            tracing::debug!("Using config path from {}: {}", ENV_CONFIG_PATH, path);
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            tracing::debug!("Using local config path: {}", local.display());
            return Some(local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("tempdash").join("config.toml");
            if path.exists() {
                tracing::debug!("Using user config path: {}", path.display());
                return Some(path);
            }
        }

        None
    }

    /// Discovers, loads and applies environment overrides. Without a config
    /// file the defaults are used, which configure no providers.
    pub fn load_default() -> ConfigLoadResult<TempdashConfig> {
        let mut config = match Self::discover_config_path() {
            Some(path) => Self::load(&path)?,
            None => {
                tracing::warn!(
                    "No config file found, starting with defaults and no providers"
                );
                TempdashConfig::default()
            }
        };

        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigLoadResult<TempdashConfig> {
        if !path.exists() {
            return Err(ConfigLoadError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;

        tracing::info!(
            path = %path.display(),
            providers = config.providers.len(),
            "Loaded config"
        );

        Ok(config)
    }

    /// Validates the raw document, then expands `${VAR}` references and
    /// resolves provider tokens, including credentials in `config` tables.
    pub fn parse(content: &str) -> ConfigLoadResult<TempdashConfig> {
        let mut value: toml::Value = toml::from_str(content)?;

        let raw = Self::deserialize(value.clone())?;
        let validation = raw.validate();
        tracing::debug!("Config validation: {}", validation.summary());
        for warning in validation.warnings() {
            tracing::warn!("Config: {}", warning);
        }
        if !validation.is_ok() {
            let errors: Vec<String> = validation.errors().map(|e| e.to_string()).collect();
            return Err(ConfigLoadError::InvalidConfig(errors.join("; ")));
        }

        interpolate_toml(&mut value)?;
        let mut config = Self::deserialize(value)?;

        for (id, provider) in config.providers.iter_mut() {
            let Some(raw_provider) = raw.providers.get(id) else {
                continue;
            };

            let interpolated = std::mem::take(&mut provider.token);
            provider.token = Self::resolve_token(&raw_provider.token, interpolated)?;

            for (key, value) in provider.config.iter_mut() {
                if !is_credential_key(key) {
                    continue;
                }
                if let Some(raw_value) = raw_provider.config.get(key) {
                    let interpolated = std::mem::take(value);
                    *value = Self::resolve_token(raw_value, interpolated)?;
                }
            }
        }

        Ok(config)
    }

    pub fn apply_env_overrides(config: &mut TempdashConfig) {
        Self::apply_overrides(config, |key| std::env::var(key).ok());
    }

    fn apply_overrides(config: &mut TempdashConfig, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(bind_addr) = lookup(ENV_BIND_ADDR) {
            tracing::debug!("Overriding server.bind_addr from {}", ENV_BIND_ADDR);
            config.server.bind_addr = bind_addr;
        }

        if let Some(raw) = lookup(ENV_PROVIDER_TIMEOUT_SECS) {
            match raw.trim().parse() {
                Ok(secs) => config.general.provider_timeout_secs = secs,
                Err(e) => tracing::warn!(
                    "Ignoring {}='{}': {}",
                    ENV_PROVIDER_TIMEOUT_SECS,
                    raw,
                    e
                ),
            }
        }
    }

    fn deserialize(value: toml::Value) -> ConfigLoadResult<TempdashConfig> {
        value.try_into().map_err(|e| {
            ConfigLoadError::InvalidConfig(format!("Failed to deserialize config: {}", e))
        })
    }

    fn resolve_token(raw: &str, interpolated: String) -> ConfigLoadResult<String> {
        match TokenReference::parse(raw)? {
            TokenReference::EnvVar(_) if has_variables(raw) => Ok(interpolated),
            reference => Ok(reference.resolve()?),
        }
    }
}
