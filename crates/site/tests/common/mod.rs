//! Shared helpers for router-level tests.
//!
//! Builds the exact router the binary serves (minus Sentry layers) and
//! drives it in-process with `tower::ServiceExt::oneshot`.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use embrion_site::config::{AnalyticsConfig, SiteConfig};
use embrion_site::content::ContentStore;
use embrion_site::state::AppState;
use http_body_util::BodyExt;
use tower::ServiceExt;

#[must_use]
pub fn test_config() -> SiteConfig {
    SiteConfig {
        host: "127.0.0.1".parse().expect("valid host"),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        analytics: AnalyticsConfig {
            ga4_measurement_id: Some("G-TEST1234".to_string()),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

#[must_use]
pub fn app() -> Router {
    let content_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
    let content = ContentStore::load(&content_dir).expect("content loads");
    let state = AppState::new(test_config(), content);
    embrion_site::app(state)
}

/// Send one request through a fresh clone of the router.
pub async fn send(app: &Router, request: Request<Body>) -> Response<axum::body::Body> {
    app.clone().oneshot(request).await.expect("request succeeds")
}

/// Simple GET request.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

/// GET request carrying a Cookie header.
#[must_use]
pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .expect("request builds")
}

/// Form POST request.
#[must_use]
pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .expect("request builds")
}

/// Collect a response body to a string.
pub async fn body_text(response: Response<axum::body::Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

/// All `Set-Cookie` header values of a response.
#[must_use]
pub fn set_cookies(response: &Response<axum::body::Body>) -> Vec<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_owned)
        .collect()
}

/// The `Set-Cookie` value for a named cookie, if present.
#[must_use]
pub fn set_cookie_named(response: &Response<axum::body::Body>, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    set_cookies(response)
        .into_iter()
        .find(|c| c.starts_with(&prefix))
}
