//! End-to-end consent flow: banner, save, persistence, reset.

mod common;

use axum::http::StatusCode;
use common::{app, body_text, get, get_with_cookie, post_form, send, set_cookie_named};

const RECORD_ALL: &str = r#"cookie-preferences={"essential":true,"analytics":true,"marketing":true,"timestamp":1700000000000}"#;
const RECORD_ANALYTICS: &str = r#"cookie-preferences={"essential":true,"analytics":true,"marketing":false,"timestamp":1700000000000}"#;

#[tokio::test]
async fn banner_shows_until_a_choice_is_made() {
    let app = app();

    // First visit: no record, banner present.
    let response = send(&app, get("/")).await;
    let body = body_text(response).await;
    assert!(body.contains("consent-banner"));

    // With a saved record the banner is gone.
    let response = send(&app, get_with_cookie("/", RECORD_ALL)).await;
    let body = body_text(response).await;
    assert!(!body.contains("consent-banner"));
}

#[tokio::test]
async fn banner_shows_again_for_a_corrupt_record() {
    let app = app();
    let response = send(
        &app,
        get_with_cookie("/", "cookie-preferences=garbage-not-json"),
    )
    .await;
    let body = body_text(response).await;
    assert!(body.contains("consent-banner"));
}

#[tokio::test]
async fn accept_all_persists_record_and_markers() {
    let app = app();
    let response = send(&app, post_form("/consent/accept-all", "return_to=/about")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some("/about")
    );

    let record = set_cookie_named(&response, "cookie-preferences").expect("record cookie set");
    assert!(record.contains(r#""analytics":true"#));
    assert!(record.contains(r#""marketing":true"#));
    assert!(record.contains(r#""essential":true"#));
    assert!(record.contains("SameSite=Lax"));
    assert!(record.contains("Path=/"));

    let marker = set_cookie_named(&response, "analytics_enabled").expect("marker cookie set");
    assert!(marker.starts_with("analytics_enabled=true"));
    assert!(set_cookie_named(&response, "marketing_enabled").is_some());
}

#[tokio::test]
async fn essential_only_declines_optional_categories() {
    let app = app();
    let response = send(&app, post_form("/consent/essential", "")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let record = set_cookie_named(&response, "cookie-preferences").expect("record cookie set");
    assert!(record.contains(r#""analytics":false"#));
    assert!(record.contains(r#""marketing":false"#));
}

#[tokio::test]
async fn reject_all_redirects_home_without_return_target() {
    let app = app();
    let response = send(&app, post_form("/consent/reject-all", "")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );
}

#[tokio::test]
async fn external_return_targets_are_ignored() {
    let app = app();
    let response = send(
        &app,
        post_form("/consent/accept-all", "return_to=https://evil.example"),
    )
    .await;
    assert_eq!(
        response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );
}

#[tokio::test]
async fn disabling_analytics_deletes_tracking_cookies() {
    let app = app();

    // Settings form with neither checkbox posted turns both categories off.
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/cookie-settings")
        .header("content-type", "application/x-www-form-urlencoded")
        .header(
            "cookie",
            format!("{RECORD_ALL}; analytics_enabled=true; _ga=GA1.1; _gid=GA1.2"),
        )
        .body(axum::body::Body::empty())
        .expect("request builds");
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let record = set_cookie_named(&response, "cookie-preferences").expect("record cookie set");
    assert!(record.contains(r#""analytics":false"#));

    // Marker and vendor cookies come back as removals (expired).
    for name in ["analytics_enabled", "_ga", "_gid"] {
        let removal = set_cookie_named(&response, name)
            .unwrap_or_else(|| panic!("expected removal for {name}"));
        assert!(
            removal.contains("Max-Age=0") || removal.contains("1970"),
            "not a removal: {removal}"
        );
    }
}

#[tokio::test]
async fn settings_page_reflects_saved_preferences() {
    let app = app();

    // Undecided visitor.
    let response = send(&app, get("/cookie-settings")).await;
    let body = body_text(response).await;
    assert!(body.contains("Not Set"));
    assert!(body.contains("Never"));

    // Analytics-only record.
    let response = send(&app, get_with_cookie("/cookie-settings", RECORD_ANALYTICS)).await;
    let body = body_text(response).await;
    assert!(body.contains("Analytics Only"));
    assert!(body.contains(r#"name="analytics" value="on" checked"#));
    assert!(!body.contains(r#"name="marketing" value="on" checked"#));
}

#[tokio::test]
async fn saving_from_settings_roundtrips() {
    let app = app();
    let response = send(&app, post_form("/cookie-settings", "analytics=on")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok()),
        Some("/cookie-settings")
    );

    let record = set_cookie_named(&response, "cookie-preferences").expect("record cookie set");
    assert!(record.contains(r#""analytics":true"#));
    assert!(record.contains(r#""marketing":false"#));
}

#[tokio::test]
async fn reset_reverts_options_but_keeps_consent() {
    let app = app();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/cookie-settings/reset")
        .header("cookie", RECORD_ALL)
        .body(axum::body::Body::empty())
        .expect("request builds");
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let record = set_cookie_named(&response, "cookie-preferences").expect("record cookie set");
    assert!(record.contains(r#""analytics":false"#));
    assert!(record.contains(r#""marketing":false"#));
    // Timestamp is re-stamped, so the record still counts as consent.
    assert!(!record.contains(r#""timestamp":0"#));
}

#[tokio::test]
async fn clear_cookies_spares_reserved_prefixes() {
    let app = app();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/cookie-settings/clear-cookies")
        .header(
            "cookie",
            format!("{RECORD_ALL}; session_id=abc; csrf_token=def; promo_banner=seen; _ga=GA1.1"),
        )
        .body(axum::body::Body::empty())
        .expect("request builds");
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // The stray cookies are expired; reserved ones are left untouched.
    for name in ["promo_banner", "_ga"] {
        let removal = set_cookie_named(&response, name)
            .unwrap_or_else(|| panic!("expected removal for {name}"));
        assert!(
            removal.contains("Max-Age=0") || removal.contains("1970"),
            "not a removal: {removal}"
        );
    }
    for name in ["session_id", "csrf_token", "cookie-preferences"] {
        assert!(
            set_cookie_named(&response, name).is_none(),
            "reserved cookie {name} must not be touched"
        );
    }
}

#[tokio::test]
async fn gtag_snippet_follows_analytics_consent() {
    let app = app();

    // No consent yet: tag loads with analytics_storage denied.
    let response = send(&app, get("/")).await;
    let body = body_text(response).await;
    assert!(body.contains("googletagmanager.com/gtag/js?id=G-TEST1234"));
    assert!(body.contains("'analytics_storage': 'denied'"));

    // Analytics granted.
    let response = send(&app, get_with_cookie("/", RECORD_ANALYTICS)).await;
    let body = body_text(response).await;
    assert!(body.contains("'analytics_storage': 'granted'"));
}
