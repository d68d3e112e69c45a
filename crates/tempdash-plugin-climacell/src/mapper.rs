use tempdash_plugin_api::{
    plausible_kelvin,
    PluginError,
    PluginResult,
    TemperatureUnit,
};

use crate::types;

pub(crate) fn first_coordinates(
    response: &types::GeocodeResponse, city: &str,
) -> PluginResult<types::Geometry> {
    let result = response.results.first().ok_or_else(|| {
        PluginError::NoData(format!("OpenCage found no location for '{city}'"))
    })?;

    tracing::debug!(
        city,
        location = result.formatted.as_deref().unwrap_or_default(),
        lat = result.geometry.lat,
        lng = result.geometry.lng,
        "Geocoded city"
    );

    Ok(result.geometry)
}

pub(crate) fn realtime_to_kelvin(realtime: &types::Realtime) -> PluginResult<f64> {
    let unit = match realtime.temp.units.as_deref() {
        None => TemperatureUnit::Celsius,
        Some(label) => TemperatureUnit::from_label(label).ok_or_else(|| {
            PluginError::ApiError(format!("ClimaCell returned an unknown unit: {label}"))
        })?,
    };

    plausible_kelvin(unit.to_kelvin(realtime.temp.value), "ClimaCell")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_first_coordinates() {
        let body = r#"{
            "results": [
                {"formatted": "Paris, France", "geometry": {"lat": 48.8566, "lng": 2.3522}},
                {"formatted": "Paris, Texas", "geometry": {"lat": 33.66, "lng": -95.55}}
            ],
            "status": {"code": 200, "message": "OK"}
        }"#;
        let response: types::GeocodeResponse = serde_json::from_str(body).unwrap();
        let geometry = first_coordinates(&response, "Paris").unwrap();
        assert!(approx(geometry.lat, 48.8566));
        assert!(approx(geometry.lng, 2.3522));
    }

    #[test]
    fn test_no_geocode_results() {
        let response: types::GeocodeResponse =
            serde_json::from_str(r#"{"results": [], "total_results": 0}"#).unwrap();
        assert!(matches!(
            first_coordinates(&response, "Atlantis"),
            Err(PluginError::NoData(_))
        ));
    }

    #[test]
    fn test_realtime_celsius_default() {
        let realtime: types::Realtime =
            serde_json::from_str(r#"{"temp": {"value": 16.85}}"#).unwrap();
        assert!(approx(realtime_to_kelvin(&realtime).unwrap(), 290.0));
    }

    #[test]
    fn test_realtime_fahrenheit() {
        let realtime: types::Realtime =
            serde_json::from_str(r#"{"temp": {"value": 50.0, "units": "F"}}"#).unwrap();
        assert!(approx(realtime_to_kelvin(&realtime).unwrap(), 283.15));
    }

    #[test]
    fn test_realtime_unknown_unit() {
        let realtime: types::Realtime =
            serde_json::from_str(r#"{"temp": {"value": 1.0, "units": "R"}}"#).unwrap();
        assert!(matches!(
            realtime_to_kelvin(&realtime),
            Err(PluginError::ApiError(_))
        ));
    }

    #[test]
    fn test_below_absolute_zero_rejected() {
        let realtime: types::Realtime =
            serde_json::from_str(r#"{"temp": {"value": -300.0, "units": "C"}}"#).unwrap();
        match realtime_to_kelvin(&realtime) {
            Err(PluginError::ApiError(msg)) => assert!(msg.contains("ClimaCell")),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }
}
