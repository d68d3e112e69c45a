use crate::application::Aggregator;
use crate::domain::{
    validate_city,
    CityTemperature,
    DomainResult,
};

pub struct WeatherService {
    aggregator: Aggregator,
}

impl WeatherService {
    pub fn new(aggregator: Aggregator) -> Self {
        Self { aggregator }
    }

    pub async fn temperature(&self, city: &str) -> DomainResult<CityTemperature> {
        let city = validate_city(city)?;

        match self.aggregator.query_timed(city).await {
            Ok(result) => {
                tracing::info!(
                    city,
                    kelvin = result.value,
                    providers = result.provider_count,
                    took_ms = result.took.as_millis() as u64,
                    "Aggregated temperature"
                );
                Ok(CityTemperature::new(city, &result))
            }
            Err(e) => {
                tracing::warn!(city, error = %e, "Temperature aggregation failed");
                Err(e)
            }
        }
    }

    pub fn provider_types(&self) -> Vec<String> {
        self.aggregator.provider_types()
    }

    pub fn provider_count(&self) -> usize {
        self.aggregator.len()
    }
}
