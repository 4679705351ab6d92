//! Legal content page route handlers.
//!
//! Serves the markdown-backed pages: privacy policy, terms of service,
//! and the cookie policy.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, response::IntoResponse, routing::get};
use chrono::NaiveDate;
use tracing::instrument;

use crate::consent::PageChrome;
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Content page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/content.html")]
pub struct ContentPageTemplate {
    pub chrome: PageChrome,
    pub title: String,
    pub description: String,
    pub updated_at: Option<NaiveDate>,
    pub content_html: String,
}

/// Serve a content page by slug.
fn serve_content_page(
    state: &AppState,
    chrome: PageChrome,
    slug: &str,
) -> Result<ContentPageTemplate, AppError> {
    let page = state
        .content()
        .get_page(slug)
        .ok_or_else(|| AppError::NotFound(format!("page: {slug}")))?;

    Ok(ContentPageTemplate {
        chrome,
        title: page.meta.title.clone(),
        description: page.meta.description.clone().unwrap_or_default(),
        updated_at: page.meta.updated_at,
        content_html: page.content_html.clone(),
    })
}

/// Display the Privacy Policy page.
///
/// # Errors
///
/// Returns 404 if the page doesn't exist.
#[instrument(skip(state, chrome))]
pub async fn privacy(
    State(state): State<AppState>,
    chrome: PageChrome,
) -> Result<impl IntoResponse, AppError> {
    serve_content_page(&state, chrome, "privacy")
}

/// Display the Terms of Service page.
///
/// # Errors
///
/// Returns 404 if the page doesn't exist.
#[instrument(skip(state, chrome))]
pub async fn terms(
    State(state): State<AppState>,
    chrome: PageChrome,
) -> Result<impl IntoResponse, AppError> {
    serve_content_page(&state, chrome, "terms")
}

/// Display the Cookie Policy page.
///
/// # Errors
///
/// Returns 404 if the page doesn't exist.
#[instrument(skip(state, chrome))]
pub async fn cookies(
    State(state): State<AppState>,
    chrome: PageChrome,
) -> Result<impl IntoResponse, AppError> {
    serve_content_page(&state, chrome, "cookies")
}

/// Create the legal pages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/privacy", get(privacy))
        .route("/terms", get(terms))
        .route("/cookies", get(cookies))
}
