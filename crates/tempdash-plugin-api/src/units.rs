//! Temperature units. Every plugin reports Kelvin so measurements from
//! different upstream APIs can be averaged directly.

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::{
    PluginError,
    PluginResult,
};

pub const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Parses the unit labels used by upstream APIs ("C", "F", "K", "celsius", ...)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "k" | "kelvin" => Some(Self::Kelvin),
            "c" | "celsius" | "°c" => Some(Self::Celsius),
            "f" | "fahrenheit" | "°f" => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    pub fn to_kelvin(self, value: f64) -> f64 {
        match self {
            Self::Kelvin => value,
            Self::Celsius => value + ZERO_CELSIUS_IN_KELVIN,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + ZERO_CELSIUS_IN_KELVIN,
        }
    }
}

/// Rejects readings no thermometer could produce: NaN, infinities and
/// anything below absolute zero.
pub fn plausible_kelvin(kelvin: f64, source: &str) -> PluginResult<f64> {
    if !kelvin.is_finite() || kelvin < 0.0 {
        return Err(PluginError::ApiError(format!(
            "{source} returned an implausible temperature: {kelvin}"
        )));
    }
    Ok(kelvin)
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kelvin => write!(f, "K"),
            Self::Celsius => write!(f, "°C"),
            Self::Fahrenheit => write!(f, "°F"),
        }
    }
}
