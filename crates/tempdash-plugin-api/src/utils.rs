//! Common utilities for plugin implementations

use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    Client,
    RequestBuilder,
};
use serde::de::DeserializeOwned;

use crate::{
    PluginError,
    PluginResult,
};

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Installs the ring crypto provider for rustls. Safe to call repeatedly.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Builds a standalone HTTP client for plugins used without a shared one
pub fn build_http_client() -> PluginResult<Client> {
    install_crypto_provider();

    Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| PluginError::Internal(format!("Failed to build HTTP client: {e}")))
}

pub fn resolve_http_client(shared: Option<Arc<Client>>) -> PluginResult<Arc<Client>> {
    match shared {
        Some(client) => Ok(client),
        None => build_http_client().map(Arc::new),
    }
}

/// Sends `request` and decodes a JSON body.
///
/// Transport failures map to `NetworkError`, non-2xx statuses to `ApiError`,
/// empty bodies to `NoData` and undecodable bodies to `SerializationError`.
/// URLs are stripped from
/// transport errors since they carry API keys in the query string.
pub async fn get_json<T: DeserializeOwned>(request: RequestBuilder, context: &str) -> PluginResult<T> {
    let response = request.send().await.map_err(|e| {
        PluginError::NetworkError(format!("{context}: {}", e.without_url()))
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        PluginError::NetworkError(format!("{context}: failed to read body: {}", e.without_url()))
    })?;

    if !status.is_success() {
        return Err(PluginError::ApiError(format!(
            "{context}: HTTP {status}: {}",
            truncate(&body, MAX_ERROR_BODY_CHARS)
        )));
    }

    if body.trim().is_empty() {
        return Err(PluginError::NoData(format!("{context}: empty response (HTTP {status})")));
    }

    serde_json::from_str(&body).map_err(|e| {
        PluginError::SerializationError(format!("{context}: unexpected response: {e}"))
    })
}

fn truncate(body: &str, max_chars: usize) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= max_chars {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(max_chars).collect();
        format!("{head}...")
    }
}
