//! OpenCage forward geocoding

use std::sync::Arc;

use reqwest::Client;
use secrecy::{
    ExposeSecret,
    SecretString,
};
use tempdash_plugin_api::utils::get_json;
use tempdash_plugin_api::PluginResult;

use crate::{
    mapper,
    types,
};

pub(crate) const DEFAULT_GEOCODER_BASE_URL: &str = "https://api.opencagedata.com";

pub(crate) struct Geocoder {
    client: Arc<Client>,
    base_url: String,
    api_key: SecretString,
}

impl Geocoder {
    pub fn new(client: Arc<Client>, base_url: String, api_key: SecretString) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Coordinates of the best match for `city`
    pub async fn locate(&self, city: &str) -> PluginResult<types::Geometry> {
        let url = format!("{}/geocode/v1/json", self.base_url);

        let request = self.client.get(&url).query(&[
            ("q", city),
            ("key", self.api_key.expose_secret()),
            ("limit", "1"),
            ("no_annotations", "1"),
        ]);

        let response: types::GeocodeResponse = get_json(request, "OpenCage geocoding").await?;
        mapper::first_coordinates(&response, city)
    }
}
