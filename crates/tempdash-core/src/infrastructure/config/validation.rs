use std::fmt;

use tempdash_plugin_api::PluginRegistry;

use super::interpolation::has_variables;
use super::schema::{
    is_credential_key,
    ProviderFileConfig,
    TempdashConfig,
};
use super::token_ref::{
    TokenRefError,
    TokenReference,
};
use crate::plugins::create_plugin_registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    MissingRequired,
    InvalidValue,
    PlainTextToken,
    UnknownProviderType,
    NoToken,
    NoProviders,
    TimeoutDisabled,
    ProviderDisabled,
}

impl IssueCode {
    pub fn severity(self) -> Severity {
        match self {
            Self::MissingRequired
            | Self::InvalidValue
            | Self::PlainTextToken
            | Self::UnknownProviderType => Severity::Error,
            Self::NoToken | Self::NoProviders | Self::TimeoutDisabled | Self::ProviderDisabled => {
                Severity::Warning
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingRequired => "MISSING_REQUIRED",
            Self::InvalidValue => "INVALID_VALUE",
            Self::PlainTextToken => "PLAIN_TEXT_TOKEN",
            Self::UnknownProviderType => "UNKNOWN_PROVIDER_TYPE",
            Self::NoToken => "NO_TOKEN",
            Self::NoProviders => "NO_PROVIDERS",
            Self::TimeoutDisabled => "TIMEOUT_DISABLED",
            Self::ProviderDisabled => "DISABLED",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
    pub code: IssueCode,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message, self.code.as_str())
    }
}

#[derive(Debug, Default)]
pub struct ValidationResult {
    issues: Vec<ConfigIssue>,
}

impl ValidationResult {
    fn report(&mut self, code: IssueCode, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ConfigIssue {
            field: field.into(),
            message: message.into(),
            code,
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ConfigIssue> {
        self.issues
            .iter()
            .filter(move |issue| issue.code.severity() == severity)
    }

    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }

    fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_clean() {
            return "Configuration is valid".to_string();
        }
        format!(
            "{} error(s), {} warning(s)",
            self.errors().count(),
            self.warnings().count()
        )
    }
}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Runs against the raw document, before `${VAR}` interpolation.
    pub fn validate(config: &TempdashConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        let bind_addr = &config.server.bind_addr;
        if !has_variables(bind_addr) {
            if let Err(e) = config.server.socket_addr() {
                result.report(
                    IssueCode::InvalidValue,
                    "server.bind_addr",
                    format!("'{bind_addr}' is not a socket address: {e}"),
                );
            }
        }

        if config.general.provider_timeout_secs == 0 {
            result.report(
                IssueCode::TimeoutDisabled,
                "general.provider_timeout_secs",
                "A provider that never answers will stall its requests",
            );
        }

        if config.enabled_providers().next().is_none() {
            result.report(
                IssueCode::NoProviders,
                "providers",
                "No providers enabled. Every weather query will fail.",
            );
        }

        let registry = create_plugin_registry();
        for (id, provider) in &config.providers {
            Self::check_provider(id, provider, &registry, &mut result);
        }

        result
    }

    fn check_provider(
        id: &str, provider: &ProviderFileConfig, registry: &PluginRegistry, result: &mut ValidationResult,
    ) {
        let prefix = format!("providers.{id}");

        if id.is_empty() {
            result.report(
                IssueCode::MissingRequired,
                "providers",
                "Provider ID (table key) cannot be empty",
            );
        }

        if !provider.enabled {
            result.report(
                IssueCode::ProviderDisabled,
                format!("{prefix}.enabled"),
                format!("Provider '{}' is disabled", provider.display_name(id)),
            );
        }

        if provider.provider_type.is_empty() {
            result.report(
                IssueCode::MissingRequired,
                format!("{prefix}.type"),
                "Provider type is required",
            );
        } else if !registry.is_registered(&provider.provider_type) {
            result.report(
                IssueCode::UnknownProviderType,
                format!("{prefix}.type"),
                format!(
                    "'{}' is not one of {}",
                    provider.provider_type,
                    registry.provider_types().join(", ")
                ),
            );
        }

        match provider.token_reference() {
            Ok(reference) if !reference.is_configured() => result.report(
                IssueCode::NoToken,
                format!("{prefix}.token"),
                format!("Provider '{id}' has no token configured"),
            ),
            Ok(_) => {}
            Err(e) => Self::report_token_error(e, format!("{prefix}.token"), result),
        }

        for (key, value) in &provider.config {
            if !is_credential_key(key) {
                continue;
            }
            if let Err(e) = TokenReference::parse(value) {
                Self::report_token_error(e, format!("{prefix}.config.{key}"), result);
            }
        }
    }

    fn report_token_error(e: TokenRefError, field: String, result: &mut ValidationResult) {
        let code = match e {
            TokenRefError::PlainTextToken(_) => IssueCode::PlainTextToken,
            _ => IssueCode::InvalidValue,
        };
        result.report(code, field, e.to_string());
    }
}
