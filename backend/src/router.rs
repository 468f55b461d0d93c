use crate::config::{Environment, HostConfig};
use axum::{
    extract::State,
    http::{header, HeaderValue},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeader;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

const SCREENSHOT_CACHE_CONTROL: &str = "public, max-age=86400";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: Environment,
}

async fn health(State(environment): State<Environment>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        environment,
    })
}

/// Serves the built landing page, its screenshots and a health probe.
/// Unknown paths get `index.html` so the page loads from any URL.
pub fn build_router(config: &HostConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let site = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));
    let screenshots = SetResponseHeader::if_not_present(
        ServeDir::new(config.screenshots_dir()),
        header::CACHE_CONTROL,
        HeaderValue::from_static(SCREENSHOT_CACHE_CONTROL),
    );

    Router::new()
        .route("/health", get(health))
        .with_state(config.environment)
        .nest_service("/screenshots", screenshots)
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn site() -> (tempfile::TempDir, HostConfig) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>pamyo</html>").unwrap();
        std::fs::create_dir(dir.path().join("screenshots")).unwrap();
        std::fs::write(dir.path().join("screenshots/ai-search.png"), b"png-bytes").unwrap();
        let config = HostConfig {
            port: 0,
            dist_dir: PathBuf::from(dir.path()),
            environment: Environment::Development,
        };
        (dir, config)
    }

    async fn fetch(router: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn health_reports_environment() {
        let (_dir, config) = site();
        let (status, _, body) = fetch(build_router(&config), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["environment"], "development");
    }

    #[tokio::test]
    async fn serves_index_at_root() {
        let (_dir, config) = site();
        let (status, _, body) = fetch(build_router(&config), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("pamyo"));
    }

    #[tokio::test]
    async fn screenshots_are_cached() {
        let (_dir, config) = site();
        let (status, headers, body) =
            fetch(build_router(&config), "/screenshots/ai-search.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "png-bytes");
        assert_eq!(
            headers.get(header::CACHE_CONTROL).unwrap(),
            SCREENSHOT_CACHE_CONTROL
        );
    }

    #[tokio::test]
    async fn missing_screenshot_is_not_found() {
        let (_dir, config) = site();
        let (status, _, _) = fetch(build_router(&config), "/screenshots/folders.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let (_dir, config) = site();
        let (status, _, body) = fetch(build_router(&config), "/some/anchor").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("pamyo"));
    }
}
