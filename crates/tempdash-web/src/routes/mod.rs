pub mod health;
mod hello;
mod plugins;
mod weather;

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{
    Any,
    CorsLayer,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/plugins", get(plugins::list_plugins))
}

pub fn router(state: AppState, cors_allow_all: bool) -> Router {
    Router::new()
        .route("/hello", get(hello::hello))
        .route("/weather/{city}", get(weather::city_temperature))
        .nest("/api/v1", api_router())
        .layer(TraceLayer::new_for_http())
        .layer(if cors_allow_all {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
        })
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::{
        to_bytes,
        Body,
    };
    use axum::http::{
        header::CONTENT_TYPE,
        Request,
        StatusCode,
    };
    use tempdash_core::{
        Aggregator,
        CityTemperature,
        DomainError,
        DomainResult,
        Provider,
        WeatherService,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::routes::health::HealthResponse;

    struct StubProvider {
        name: &'static str,
        reading: Option<f64>,
    }

    #[async_trait]
    impl Provider for StubProvider {
        async fn measure(&self, _key: &str) -> DomainResult<f64> {
            tokio::time::sleep(Duration::from_millis(2)).await;
            self.reading
                .ok_or_else(|| DomainError::ProviderFailure(format!("{}: HTTP 403", self.name)))
        }

        fn provider_type(&self) -> &str {
            self.name
        }
    }

    fn app(providers: Vec<StubProvider>) -> Router {
        let providers = providers
            .into_iter()
            .map(|p| Arc::new(p) as Arc<dyn Provider>)
            .collect();
        let service = WeatherService::new(Aggregator::new(providers));
        router(AppState::with_service(service), true)
    }

    fn healthy() -> Vec<StubProvider> {
        vec![
            StubProvider {
                name: "openweathermap",
                reading: Some(280.0),
            },
            StubProvider {
                name: "weatherbit",
                reading: Some(300.0),
            },
        ]
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_hello() {
        let (status, _, body) = fetch(app(vec![]), "/hello").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "hello!");
    }

    #[tokio::test]
    async fn test_weather_success() {
        let (status, content_type, body) = fetch(app(healthy()), "/weather/Paris").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");

        let reading: CityTemperature = serde_json::from_str(&body).unwrap();
        assert_eq!(reading.city, "Paris");
        assert!((reading.temp - 290.0).abs() < 1e-9);
        assert!(!reading.took.is_empty());
    }

    #[tokio::test]
    async fn test_weather_decodes_city() {
        let (status, _, body) = fetch(app(healthy()), "/weather/New%20York").await;

        assert_eq!(status, StatusCode::OK);
        let reading: CityTemperature = serde_json::from_str(&body).unwrap();
        assert_eq!(reading.city, "New York");
    }

    #[tokio::test]
    async fn test_weather_provider_failure() {
        let mut providers = healthy();
        providers.push(StubProvider {
            name: "climacell",
            reading: None,
        });

        let (status, content_type, body) = fetch(app(providers), "/weather/Paris").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, "climacell: HTTP 403");
    }

    #[tokio::test]
    async fn test_weather_without_providers() {
        let (status, _, body) = fetch(app(vec![]), "/weather/Paris").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "No providers configured");
    }

    #[tokio::test]
    async fn test_weather_blank_city() {
        let (status, _, body) = fetch(app(healthy()), "/weather/%20%20").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Invalid input"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = fetch(app(healthy()), "/api/v1/health").await;

        assert_eq!(status, StatusCode::OK);
        let health: HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.provider_count, 2);
        assert_eq!(health.providers, vec!["openweathermap", "weatherbit"]);
    }

    #[tokio::test]
    async fn test_health_without_providers() {
        let (_, _, body) = fetch(app(vec![]), "/api/v1/health").await;

        let health: HealthResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(health.status, "no_providers");
        assert_eq!(health.provider_count, 0);
    }

    #[tokio::test]
    async fn test_plugins() {
        let (status, _, body) = fetch(app(vec![]), "/api/v1/plugins").await;

        assert_eq!(status, StatusCode::OK);
        let plugins: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        let types: Vec<_> = plugins
            .iter()
            .filter_map(|p| p["provider_type"].as_str())
            .collect();
        assert_eq!(types, vec!["climacell", "openweathermap", "weatherbit"]);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _, _) = fetch(app(vec![]), "/weather").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
