//! Lead capture API.
//!
//! A single validation-and-log endpoint: the submitted lead is checked for
//! shape, logged for the sales inbox to pick up out of the log pipeline,
//! and acknowledged. There is no queue and no persistence.

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use embrion_core::Email;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::middleware::lead_rate_limiter;
use crate::state::AppState;

/// Minimum length for the submitted name.
const MIN_NAME_LEN: usize = 2;

/// Minimum length for the submitted message.
const MIN_MESSAGE_LEN: usize = 10;

/// Raw lead submission, as posted by the contact form or the JSON API.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    pub message: String,
}

/// A single failed validation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Response for lead submission.
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// A validated lead ready to log.
#[derive(Debug)]
pub struct Lead {
    pub name: String,
    pub email: Email,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub topic: Option<String>,
    pub message: String,
}

/// Validate a raw submission into a [`Lead`].
///
/// # Errors
///
/// Returns every failed field check, not just the first one, so the form
/// can annotate all of them at once.
pub fn validate(form: &LeadForm) -> Result<Lead, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.len() < MIN_NAME_LEN {
        errors.push(FieldError {
            field: "name",
            message: format!("Name must be at least {MIN_NAME_LEN} characters"),
        });
    }

    let email = Email::parse(&form.email.trim().to_lowercase());
    if email.is_err() {
        errors.push(FieldError {
            field: "email",
            message: "Please enter a valid email address".to_string(),
        });
    }

    let message = form.message.trim();
    if message.len() < MIN_MESSAGE_LEN {
        errors.push(FieldError {
            field: "message",
            message: format!("Message must be at least {MIN_MESSAGE_LEN} characters"),
        });
    }

    match email {
        Ok(email) if errors.is_empty() => Ok(Lead {
            name: name.to_owned(),
            email,
            company: trimmed(form.company.as_deref()),
            phone: trimmed(form.phone.as_deref()),
            topic: trimmed(form.topic.as_deref()),
            message: message.to_owned(),
        }),
        _ => Err(errors),
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

/// Record a validated lead.
///
/// Downstream alerting watches for this event; there is deliberately no
/// mail delivery or storage here.
pub fn log_lead(lead: &Lead) {
    tracing::info!(
        name = %lead.name,
        email = %lead.email,
        company = lead.company.as_deref().unwrap_or(""),
        phone = lead.phone.as_deref().unwrap_or(""),
        topic = lead.topic.as_deref().unwrap_or(""),
        message = %lead.message,
        "New lead received"
    );
}

/// Submit a lead.
///
/// POST /api/lead
#[instrument(skip(form), fields(email = %form.email))]
pub async fn submit(Json(form): Json<LeadForm>) -> impl IntoResponse {
    match validate(&form) {
        Ok(lead) => {
            log_lead(&lead);
            (
                StatusCode::OK,
                Json(LeadResponse {
                    success: true,
                    message: Some("Lead received successfully".to_string()),
                    errors: None,
                }),
            )
        }
        Err(errors) => (
            StatusCode::BAD_REQUEST,
            Json(LeadResponse {
                success: false,
                message: Some("Invalid input data".to_string()),
                errors: Some(errors),
            }),
        ),
    }
}

/// Create the lead API router, rate limited per IP.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/lead", post(submit))
        .layer(lead_rate_limiter())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> LeadForm {
        LeadForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: Some("Analytical Engines Ltd".to_string()),
            phone: None,
            topic: Some("partnership".to_string()),
            message: "We would like to talk about your platform.".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_good_form() {
        let lead = validate(&valid_form()).unwrap();
        assert_eq!(lead.name, "Ada Lovelace");
        assert_eq!(lead.email.as_str(), "ada@example.com");
        assert_eq!(lead.topic.as_deref(), Some("partnership"));
        assert!(lead.phone.is_none());
    }

    #[test]
    fn test_validate_lowercases_email() {
        let form = LeadForm {
            email: "  Ada@Example.COM ".to_string(),
            ..valid_form()
        };
        let lead = validate(&form).unwrap();
        assert_eq!(lead.email.as_str(), "ada@example.com");
    }

    #[test]
    fn test_validate_rejects_short_name() {
        let form = LeadForm {
            name: " A ".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let form = LeadForm {
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_validate_rejects_short_message() {
        let form = LeadForm {
            message: "hi".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors[0].field, "message");
    }

    #[test]
    fn test_validate_collects_every_error() {
        let form = LeadForm {
            name: String::new(),
            email: "nope".to_string(),
            company: None,
            phone: None,
            topic: None,
            message: "short".to_string(),
        };
        let errors = validate(&form).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let form = LeadForm {
            company: Some("   ".to_string()),
            ..valid_form()
        };
        let lead = validate(&form).unwrap();
        assert!(lead.company.is_none());
    }
}
