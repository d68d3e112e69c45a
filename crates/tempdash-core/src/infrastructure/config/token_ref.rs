use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenRefError {
    #[error("Plain-text token detected: {0}")]
    PlainTextToken(String),

    #[error("Invalid token reference format: {0}")]
    InvalidFormat(String),

    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
}

/// Where a provider credential comes from. Credentials never live in the
/// config file itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenReference {
    EnvVar(String),
    #[default]
    None,
}

impl fmt::Display for TokenReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvVar(name) => write!(f, "${{{}}}", name),
            Self::None => write!(f, "(not configured)"),
        }
    }
}

impl TokenReference {
    /// Accepts `${VAR}`, `${VAR:-default}`, `env:VAR`, a bare `UPPER_SNAKE`
    /// variable name, or an empty string.
    pub fn parse(value: &str) -> Result<Self, TokenRefError> {
        let value = value.trim();

        if value.is_empty() {
            return Ok(Self::None);
        }

        if let Some(inner) = value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
            let var_name = inner.split(":-").next().unwrap_or(inner);
            if var_name.is_empty() {
                return Err(TokenRefError::InvalidFormat(
                    "Empty variable name in ${}".to_string(),
                ));
            }
            return Ok(Self::EnvVar(var_name.to_string()));
        }

        if let Some(var_name) = value.strip_prefix("env:") {
            if var_name.is_empty() {
                return Err(TokenRefError::InvalidFormat(
                    "Empty variable name after env:".to_string(),
                ));
            }
            return Ok(Self::EnvVar(var_name.to_string()));
        }

        if Self::looks_like_env_var_name(value) {
            return Ok(Self::EnvVar(value.to_string()));
        }

        if Self::looks_like_token(value) {
            return Err(TokenRefError::PlainTextToken(
                "Plain-text tokens are not allowed in config. Use ${ENV_VAR} or env:VAR."
                    .to_string(),
            ));
        }

        Err(TokenRefError::InvalidFormat(format!(
            "Unknown token reference format: '{}'. Use ${{ENV_VAR}} or env:VAR",
            value
        )))
    }

    pub fn is_configured(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn resolve(&self) -> Result<String, TokenRefError> {
        match self {
            Self::EnvVar(name) => {
                std::env::var(name).map_err(|_| TokenRefError::EnvVarNotFound(name.clone()))
            }
            Self::None => Ok(String::new()),
        }
    }

    /// API keys of the supported services are 32+ character hex or
    /// mixed-case alphanumeric strings.
    fn looks_like_token(value: &str) -> bool {
        if value.len() >= 24
            && value
                .chars()
                .all(|c| c.is_ascii_hexdigit() || c == '-' || c == '_')
        {
            return true;
        }

        if value.len() >= 20
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
            let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
            let has_digit = value.chars().any(|c| c.is_ascii_digit());
            if (has_digit || has_upper) && has_lower || has_upper && has_digit {
                return true;
            }
        }

        false
    }

    fn looks_like_env_var_name(value: &str) -> bool {
        value
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            && value.chars().next().is_some_and(|c| c.is_ascii_uppercase())
    }
}
