//! HTTP API route definitions.

use axum::http::{HeaderName, HeaderValue};
use axum::routing::{get, post, put};
use axum::{middleware, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    greet_default, greet_name, health, login, logout, questions, signup, update_greeting, AppState,
};
use crate::metrics;

/// Create the API router.
///
/// Every response, including errors and the optional `/metrics` exposition,
/// carries the four fixed CORS headers the browser frontend relies on.
pub fn create_router(
    state: AppState,
    cors_origin: &str,
    metrics_handle: Option<PrometheusHandle>,
) -> Router {
    // Invalid header bytes in CORS_ORIGIN fall back to the stock origin.
    let allow_origin = HeaderValue::from_str(cors_origin)
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:8080"));

    let mut router = Router::new()
        // Greeting endpoints
        .route("/greet", get(greet_default))
        .route("/greet/questions", get(questions))
        .route("/greet/greeting", put(update_greeting))
        // Demo login/signup flow
        .route("/greet/login", post(login))
        .route("/greet/signup", post(signup))
        .route("/greet/logout", get(logout))
        // Named greeting last; static segments above take precedence
        .route("/greet/:name", get(greet_name))
        // Health endpoint
        .route("/health", get(health));

    if let Some(handle) = metrics_handle {
        router = router.route("/metrics", get(move || async move { handle.render() }));
    }

    router
        .layer(middleware::from_fn(metrics::track_http))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-origin"),
            allow_origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-headers"),
            HeaderValue::from_static("Origin, Content-Type, Accept, Authorization"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-credentials"),
            HeaderValue::from_static("true"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS, HEAD"),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_router() -> Router {
        let config = Config::default();
        create_router(AppState::new(&config), &config.cors_origin, None)
    }

    #[tokio::test]
    async fn greet_endpoint_returns_ok() {
        let response = test_router()
            .oneshot(Request::builder().uri("/greet").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn every_response_carries_fixed_cors_headers() {
        let response = test_router()
            .oneshot(Request::builder().uri("/greet").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers["access-control-allow-origin"],
            "http://localhost:8080"
        );
        assert_eq!(
            headers["access-control-allow-headers"],
            "Origin, Content-Type, Accept, Authorization"
        );
        assert_eq!(headers["access-control-allow-credentials"], "true");
        assert_eq!(
            headers["access-control-allow-methods"],
            "GET, POST, PUT, DELETE, OPTIONS, HEAD"
        );
    }

    #[tokio::test]
    async fn cors_headers_are_present_on_errors_too() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/no-such-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:8080"
        );
    }

    #[tokio::test]
    async fn static_segments_win_over_named_greeting() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/greet/questions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("application/json"));
    }

    #[tokio::test]
    async fn configured_origin_is_reflected() {
        let config = Config {
            cors_origin: "http://example.test:3000".to_string(),
            ..Config::default()
        };
        let router = create_router(AppState::new(&config), &config.cors_origin, None);

        let response = router
            .oneshot(Request::builder().uri("/greet").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://example.test:3000"
        );
    }
}
