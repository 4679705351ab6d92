//! Service catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use embrion_core::Service;
use tracing::instrument;

use crate::consent::PageChrome;
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Service listing template.
#[derive(Template, WebTemplate)]
#[template(path = "services/index.html")]
pub struct ServiceIndexTemplate {
    pub chrome: PageChrome,
    pub services: Vec<Service>,
}

/// Service detail template.
#[derive(Template, WebTemplate)]
#[template(path = "services/show.html")]
pub struct ServiceShowTemplate {
    pub chrome: PageChrome,
    pub service: Service,
}

/// Display the service listing.
#[instrument(skip(state, chrome))]
pub async fn index(State(state): State<AppState>, chrome: PageChrome) -> impl IntoResponse {
    ServiceIndexTemplate {
        chrome,
        services: state.catalog().services().to_vec(),
    }
}

/// Display a single service by slug.
///
/// # Errors
///
/// Returns 404 if no service has the given slug.
#[instrument(skip(state, chrome))]
pub async fn show(
    State(state): State<AppState>,
    chrome: PageChrome,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = state
        .catalog()
        .service_by_slug(&slug)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("service: {slug}")))?;

    Ok(ServiceShowTemplate { chrome, service })
}

/// Create the service routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{slug}", get(show))
}
