pub mod aggregator;
pub mod weather_service;

pub use aggregator::Aggregator;
pub use weather_service::WeatherService;
