use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS policy from a comma-separated origin list; an empty or unparsable list
/// allows any origin
pub fn create_cors_layer(allowed_origins: &str) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok())
        .filter(|origin| !origin.is_empty())
        .collect();

    let origins = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-request-id"),
        ])
        .max_age(std::time::Duration::from_secs(86400)) // 24 hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn preflight(layer: CorsLayer, origin: &str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/jobs", get(|| async { "ok" }))
            .layer(layer);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/jobs")
                    .header("origin", origin)
                    .header("access-control-request-method", "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get("access-control-allow-origin")
            .cloned()
    }

    #[tokio::test]
    async fn test_listed_origin_is_allowed() {
        let layer = create_cors_layer("https://example.com, https://app.example.com");

        let allowed = preflight(layer, "https://app.example.com").await;

        assert_eq!(allowed.unwrap(), "https://app.example.com");
    }

    #[tokio::test]
    async fn test_unlisted_origin_is_not_echoed() {
        let layer = create_cors_layer("https://example.com");

        assert!(preflight(layer, "https://evil.test").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_list_allows_any_origin() {
        let allowed = preflight(create_cors_layer(""), "https://anywhere.test").await;

        assert_eq!(allowed.unwrap(), "*");
    }
}
