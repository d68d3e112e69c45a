use tempdash_plugin_api::{
    plausible_kelvin,
    PluginError,
    PluginResult,
    TemperatureUnit,
};

use crate::types;

/// Takes the first observation, as Weatherbit orders them by relevance
pub(crate) fn observations_to_kelvin(
    observations: &types::CurrentObservations, city: &str,
) -> PluginResult<f64> {
    let observation = observations.data.first().ok_or_else(|| {
        PluginError::NoData(format!("Weatherbit returned no observations for '{city}'"))
    })?;

    plausible_kelvin(TemperatureUnit::Kelvin.to_kelvin(observation.temp), "Weatherbit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_wins() {
        let body = r#"{
            "data": [
                {"city_name": "Paris", "temp": 291.4, "rh": 60},
                {"city_name": "Paris", "temp": 250.0}
            ],
            "count": 2
        }"#;
        let observations: types::CurrentObservations = serde_json::from_str(body).unwrap();
        assert_eq!(observations.data[0].city_name.as_deref(), Some("Paris"));
        assert_eq!(observations_to_kelvin(&observations, "Paris").unwrap(), 291.4);
    }

    #[test]
    fn test_empty_data_is_no_data() {
        let observations: types::CurrentObservations =
            serde_json::from_str(r#"{"data": [], "count": 0}"#).unwrap();
        let err = observations_to_kelvin(&observations, "Atlantis").unwrap_err();
        assert!(matches!(err, PluginError::NoData(_)));
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn test_missing_data_defaults_to_empty() {
        let observations: types::CurrentObservations =
            serde_json::from_str(r#"{"error": "API key not valid"}"#).unwrap();
        assert!(observations_to_kelvin(&observations, "Paris").is_err());
    }

    #[test]
    fn test_negative_kelvin_rejected() {
        let observations: types::CurrentObservations =
            serde_json::from_str(r#"{"data": [{"temp": -4.0}], "count": 1}"#).unwrap();
        let err = observations_to_kelvin(&observations, "Paris").unwrap_err();
        assert!(matches!(err, PluginError::ApiError(_)));
        assert!(err.to_string().contains("Weatherbit"));
    }
}
