//! HTTP client for the OpenWeatherMap API

use std::sync::Arc;

use reqwest::Client;
use secrecy::{
    ExposeSecret,
    SecretString,
};
use tempdash_plugin_api::utils::get_json;
use tempdash_plugin_api::PluginResult;

use crate::types;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

pub(crate) struct OpenWeatherMapClient {
    client: Arc<Client>,
    base_url: String,
    api_key: SecretString,
}

impl OpenWeatherMapClient {
    pub fn new(client: Arc<Client>, base_url: String, api_key: SecretString) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Fetches current conditions for `city`
    pub async fn fetch_current(&self, city: &str) -> PluginResult<types::CurrentWeather> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let request = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.expose_secret())]);

        get_json(request, "OpenWeatherMap current weather").await
    }
}
