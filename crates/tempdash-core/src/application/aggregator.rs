use std::sync::Arc;
use std::time::{
    Duration,
    Instant,
};

use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::domain::{
    AggregationResult,
    DomainError,
    DomainResult,
    Outcome,
    Provider,
};

/// Queries a fixed set of providers concurrently and reduces their
/// measurements to a single mean.
#[derive(Clone)]
pub struct Aggregator {
    providers: Vec<Arc<dyn Provider>>,
    provider_timeout: Option<Duration>,
}

impl Aggregator {
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self {
            providers,
            provider_timeout: None,
        }
    }

    /// Bounds each provider call. An elapsed deadline is reported as a
    /// provider failure. `None` waits for as long as the provider takes.
    pub fn with_provider_timeout(mut self, provider_timeout: Option<Duration>) -> Self {
        self.provider_timeout = provider_timeout;
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_types(&self) -> Vec<String> {
        self.providers
            .iter()
            .map(|p| p.provider_type().to_string())
            .collect()
    }

    /// Mean of every provider's measurement for `key`.
    ///
    /// Returns the first failure as soon as it arrives. Providers still in
    /// flight at that point are neither awaited nor cancelled; their tasks
    /// run to completion and whatever they report is dropped.
    pub async fn query(&self, key: &str) -> DomainResult<f64> {
        let expected = self.providers.len();
        if expected == 0 {
            return Err(DomainError::EmptyProviderSet);
        }

        let (tx, mut rx) = mpsc::channel::<Outcome>(expected);

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let tx = tx.clone();
            let key = key.to_string();
            let provider_timeout = self.provider_timeout;

            tokio::spawn(async move {
                let result = measure(provider.as_ref(), &key, provider_timeout).await;
                // Fails only when the aggregator already returned an earlier failure.
                let _ = tx.send(Outcome::from(result)).await;
            });
        }
        drop(tx);

        let mut sum = 0.0;
        for received in 0..expected {
            match rx.recv().await {
                Some(Outcome::Measurement(value)) => sum += value,
                Some(Outcome::Failure(e)) => {
                    tracing::debug!(
                        key,
                        received,
                        abandoned = expected - received - 1,
                        error = %e,
                        "Provider failed, returning without waiting for the rest"
                    );
                    return Err(e);
                }
                None => {
                    return Err(DomainError::InternalError(format!(
                        "{} of {} provider tasks exited without reporting",
                        expected - received,
                        expected
                    )));
                }
            }
        }

        Ok(sum / expected as f64)
    }

    /// [`query`](Self::query) plus the wall-clock time the call took
    pub async fn query_timed(&self, key: &str) -> DomainResult<AggregationResult> {
        let begin = Instant::now();
        let value = self.query(key).await?;

        Ok(AggregationResult {
            value,
            took: begin.elapsed(),
            provider_count: self.providers.len(),
        })
    }
}

async fn measure(
    provider: &dyn Provider, key: &str, provider_timeout: Option<Duration>,
) -> DomainResult<f64> {
    let Some(limit) = provider_timeout else {
        return provider.measure(key).await;
    };

    match timeout(limit, provider.measure(key)).await {
        Ok(result) => result,
        Err(_elapsed) => Err(DomainError::ProviderFailure(format!(
            "{}: timed out after {:?}",
            provider.provider_type(),
            limit
        ))),
    }
}
