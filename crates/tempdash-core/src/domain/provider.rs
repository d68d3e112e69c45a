use async_trait::async_trait;

use super::error::DomainResult;

/// A source of one temperature measurement per query key.
///
/// Implementations report Kelvin and collapse every internal failure into
/// [`DomainError::ProviderFailure`](super::DomainError::ProviderFailure).
#[async_trait]
pub trait Provider: Send + Sync {
    async fn measure(&self, key: &str) -> DomainResult<f64>;

    fn provider_type(&self) -> &str;
}
