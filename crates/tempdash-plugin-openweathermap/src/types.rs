//! API response types for the OpenWeatherMap current weather endpoint

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeather {
    #[serde(default)]
    pub name: Option<String>,
    pub main: Main,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Main {
    /// Kelvin unless `units` was passed in the request
    pub temp: f64,
}
