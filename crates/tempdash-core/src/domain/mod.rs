pub mod error;
pub mod measurement;
pub mod provider;
pub mod validation;

pub use error::{
    DomainError,
    DomainResult,
};
pub use measurement::{
    AggregationResult,
    CityTemperature,
    Outcome,
};
pub use provider::Provider;
pub use validation::validate_city;
