//! HTTP client for the ClimaCell realtime API

use std::sync::Arc;

use reqwest::Client;
use secrecy::{
    ExposeSecret,
    SecretString,
};
use tempdash_plugin_api::utils::get_json;
use tempdash_plugin_api::PluginResult;

use crate::types;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.climacell.co";

pub(crate) struct ClimaCellClient {
    client: Arc<Client>,
    base_url: String,
    api_key: SecretString,
}

impl ClimaCellClient {
    pub fn new(client: Arc<Client>, base_url: String, api_key: SecretString) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub async fn fetch_realtime(&self, geometry: types::Geometry) -> PluginResult<types::Realtime> {
        let url = format!("{}/v3/weather/realtime", self.base_url);
        let lat = geometry.lat.to_string();
        let lon = geometry.lng.to_string();

        let request = self.client.get(&url).query(&[
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("fields", "temp"),
            ("apikey", self.api_key.expose_secret()),
        ]);

        get_json(request, "ClimaCell realtime").await
    }
}

#[cfg(test)]
mod tests {
    use tempdash_plugin_api::utils::build_http_client;
    use tempdash_plugin_api::PluginError;
    use tokio::io::{
        AsyncReadExt,
        AsyncWriteExt,
    };
    use tokio::net::TcpListener;

    use super::*;

    /// Serves one canned response and returns the request line received
    async fn serve_once(
        status: &'static str, body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            while !received.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&received).lines().next().unwrap_or_default().to_string()
        });

        (base_url, handle)
    }

    fn client(base_url: String) -> ClimaCellClient {
        ClimaCellClient::new(
            Arc::new(build_http_client().unwrap()),
            base_url,
            SecretString::from("cc-key".to_string()),
        )
    }

    #[tokio::test]
    async fn test_fetch_realtime_request_shape() {
        let (base_url, server) =
            serve_once("200 OK", r#"{"temp": {"value": 16.85, "units": "C"}}"#).await;

        let geometry = types::Geometry {
            lat: 48.5,
            lng: 2.25,
        };
        let realtime = client(base_url).fetch_realtime(geometry).await.unwrap();

        assert_eq!(realtime.temp.value, 16.85);
        assert_eq!(realtime.temp.units.as_deref(), Some("C"));
        assert_eq!(
            server.await.unwrap(),
            "GET /v3/weather/realtime?lat=48.5&lon=2.25&fields=temp&apikey=cc-key HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_fetch_realtime_server_error() {
        let (base_url, server) = serve_once("503 Service Unavailable", "").await;

        let geometry = types::Geometry { lat: 0.0, lng: 0.0 };
        let result = client(base_url).fetch_realtime(geometry).await;
        server.await.unwrap();

        assert!(matches!(result, Err(PluginError::ApiError(_))));
    }
}
