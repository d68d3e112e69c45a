use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use reqwest::Client;
use tempdash_plugin_api::utils::install_crypto_provider;

use crate::domain::{
    DomainError,
    DomainResult,
};

pub const ENV_HTTP_POOL_SIZE: &str = "TEMPDASH_HTTP_POOL_SIZE";
const DEFAULT_POOL_SIZE: usize = 10;

/// Pooled reqwest clients shared by every provider. Providers with a custom
/// `base_url` get a dedicated client so their pools do not compete.
pub struct HttpClientManager {
    pool_size: usize,
    shared: Arc<Client>,
    per_base_url: DashMap<String, Arc<Client>>,
}

impl HttpClientManager {
    pub fn new() -> DomainResult<Self> {
        let pool_size = std::env::var(ENV_HTTP_POOL_SIZE)
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_POOL_SIZE);
        Self::with_pool_size(pool_size)
    }

    pub fn with_pool_size(pool_size: usize) -> DomainResult<Self> {
        install_crypto_provider();

        Ok(Self {
            pool_size,
            shared: Arc::new(build_client(pool_size)?),
            per_base_url: DashMap::new(),
        })
    }

    pub fn default_client(&self) -> Arc<Client> {
        Arc::clone(&self.shared)
    }

    pub fn client_for_url(&self, base_url: &str) -> DomainResult<Arc<Client>> {
        let key = base_url.trim_end_matches('/').to_string();
        let entry = self
            .per_base_url
            .entry(key)
            .or_try_insert_with(|| build_client(self.pool_size).map(Arc::new))?;
        Ok(Arc::clone(entry.value()))
    }
}

fn build_client(pool_size: usize) -> DomainResult<Client> {
    Client::builder()
        .pool_max_idle_per_host(pool_size)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| DomainError::InternalError(format!("HTTP client setup failed: {e}")))
}
