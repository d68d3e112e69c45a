use tempdash_plugin_api::{
    plausible_kelvin,
    PluginResult,
    TemperatureUnit,
};

use crate::types;

pub(crate) fn current_to_kelvin(weather: &types::CurrentWeather) -> PluginResult<f64> {
    plausible_kelvin(
        TemperatureUnit::Kelvin.to_kelvin(weather.main.temp),
        "OpenWeatherMap",
    )
}
