//! Lead capture API tests.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{app, body_text, send};
use serde_json::{Value, json};

fn lead_request(from_ip: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/lead")
        .header("content-type", "application/json")
        .header("x-forwarded-for", from_ip)
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn valid_payload() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "company": "Analytical Engines Ltd",
        "topic": "custom software",
        "message": "We would like to discuss a clinical decision support tool."
    })
}

#[tokio::test]
async fn valid_lead_is_accepted() {
    let app = app();
    let response = send(&app, lead_request("203.0.113.1", &valid_payload())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).expect("json body");
    assert_eq!(body["success"], json!(true));
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn invalid_lead_returns_field_errors() {
    let app = app();
    let payload = json!({
        "name": "A",
        "email": "not-an-email",
        "message": "short"
    });
    let response = send(&app, lead_request("203.0.113.2", &payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body_text(response).await).expect("json body");
    assert_eq!(body["success"], json!(false));

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["name", "email", "message"]);
}

#[tokio::test]
async fn optional_fields_may_be_omitted() {
    let app = app();
    let payload = json!({
        "name": "Grace Hopper",
        "email": "grace@example.com",
        "message": "Interested in a data strategy engagement."
    });
    let response = send(&app, lead_request("203.0.113.3", &payload)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn repeated_submissions_are_rate_limited() {
    let app = app();
    let payload = valid_payload();

    let mut statuses = Vec::new();
    for _ in 0..8 {
        let response = send(&app, lead_request("203.0.113.99", &payload)).await;
        statuses.push(response.status());
    }

    // Burst of 5 allowed; the tail of a fast burst must hit the limiter.
    assert_eq!(statuses[0], StatusCode::OK);
    assert!(
        statuses
            .iter()
            .any(|s| *s == StatusCode::TOO_MANY_REQUESTS),
        "expected a 429 in {statuses:?}"
    );
}

#[tokio::test]
async fn contact_form_submission_renders_confirmation() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(
            "name=Ada+Lovelace&email=ada%40example.com&message=We+would+like+to+discuss+a+project.",
        ))
        .expect("request builds");
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("your message has been received"));
}

#[tokio::test]
async fn contact_form_shows_validation_errors() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=A&email=bad&message=hi"))
        .expect("request builds");
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("valid email address"));
    assert!(body.contains("at least 10 characters"));
}
