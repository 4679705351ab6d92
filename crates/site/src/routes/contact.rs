//! Contact page route handlers.
//!
//! The page posts back to itself as a regular form; the JSON-speaking
//! `/api/lead` endpoint shares the same validation in [`super::lead`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::IntoResponse};
use tracing::instrument;

use super::lead::{self, FieldError, LeadForm};
use crate::consent::PageChrome;
use crate::filters;

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub chrome: PageChrome,
    /// Set after a successful submission.
    pub submitted: bool,
    pub errors: Vec<FieldError>,
}

/// Display the contact page.
#[instrument(skip(chrome))]
pub async fn show(chrome: PageChrome) -> impl IntoResponse {
    ContactTemplate {
        chrome,
        submitted: false,
        errors: Vec::new(),
    }
}

/// Handle a contact form submission.
#[instrument(skip(chrome, form), fields(email = %form.email))]
pub async fn submit(chrome: PageChrome, Form(form): Form<LeadForm>) -> impl IntoResponse {
    match lead::validate(&form) {
        Ok(valid) => {
            lead::log_lead(&valid);
            ContactTemplate {
                chrome,
                submitted: true,
                errors: Vec::new(),
            }
        }
        Err(errors) => ContactTemplate {
            chrome,
            submitted: false,
            errors,
        },
    }
}
