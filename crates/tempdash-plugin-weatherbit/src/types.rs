//! API response types for the Weatherbit current observations endpoint

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentObservations {
    #[serde(default)]
    pub data: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Observation {
    #[serde(default)]
    pub city_name: Option<String>,
    pub temp: f64,
}
