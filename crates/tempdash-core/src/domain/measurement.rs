use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

use super::error::{
    DomainError,
    DomainResult,
};

/// What one provider task reports back during a single aggregation call
#[derive(Debug)]
pub enum Outcome {
    Measurement(f64),
    Failure(DomainError),
}

impl From<DomainResult<f64>> for Outcome {
    fn from(result: DomainResult<f64>) -> Self {
        match result {
            Ok(value) => Outcome::Measurement(value),
            Err(e) => Outcome::Failure(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationResult {
    /// Arithmetic mean of every provider's measurement, in Kelvin
    pub value: f64,
    pub took: Duration,
    pub provider_count: usize,
}

/// Response body of the weather endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityTemperature {
    pub city: String,
    pub temp: f64,
    pub took: String,
}

impl CityTemperature {
    pub fn new(city: impl Into<String>, result: &AggregationResult) -> Self {
        Self {
            city: city.into(),
            temp: result.value,
            took: format!("{:?}", result.took),
        }
    }
}
