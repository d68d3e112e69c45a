//! HTTP client for the Weatherbit API

use std::sync::Arc;

use reqwest::Client;
use secrecy::{
    ExposeSecret,
    SecretString,
};
use tempdash_plugin_api::utils::get_json;
use tempdash_plugin_api::PluginResult;

use crate::types;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.weatherbit.io";

pub(crate) struct WeatherbitClient {
    client: Arc<Client>,
    base_url: String,
    api_key: SecretString,
}

impl WeatherbitClient {
    pub fn new(client: Arc<Client>, base_url: String, api_key: SecretString) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Fetches current observations for `city` in scientific units (Kelvin)
    pub async fn fetch_current(&self, city: &str) -> PluginResult<types::CurrentObservations> {
        let url = format!("{}/v2.0/current", self.base_url);

        let request = self.client.get(&url).query(&[
            ("units", "S"),
            ("city", city),
            ("key", self.api_key.expose_secret()),
        ]);

        get_json(request, "Weatherbit current observations").await
    }
}
