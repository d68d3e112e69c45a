//! API response types for OpenCage geocoding and ClimaCell realtime weather

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    pub geometry: Geometry,
    #[serde(default)]
    pub formatted: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct Geometry {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Realtime {
    pub temp: Reading,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Reading {
    pub value: f64,
    /// "C" or "F"; absent means the API default (Celsius)
    #[serde(default)]
    pub units: Option<String>,
}
