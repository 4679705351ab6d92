//! Case study route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use embrion_core::CaseStudy;
use tracing::instrument;

use crate::consent::PageChrome;
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Case study listing template.
#[derive(Template, WebTemplate)]
#[template(path = "case_studies/index.html")]
pub struct CaseStudyIndexTemplate {
    pub chrome: PageChrome,
    pub case_studies: Vec<CaseStudy>,
}

/// Case study detail template.
#[derive(Template, WebTemplate)]
#[template(path = "case_studies/show.html")]
pub struct CaseStudyShowTemplate {
    pub chrome: PageChrome,
    pub case_study: CaseStudy,
}

/// Display the case study listing.
#[instrument(skip(state, chrome))]
pub async fn index(State(state): State<AppState>, chrome: PageChrome) -> impl IntoResponse {
    CaseStudyIndexTemplate {
        chrome,
        case_studies: state.catalog().case_studies().to_vec(),
    }
}

/// Display a single case study by slug.
///
/// # Errors
///
/// Returns 404 if no case study has the given slug.
#[instrument(skip(state, chrome))]
pub async fn show(
    State(state): State<AppState>,
    chrome: PageChrome,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let case_study = state
        .catalog()
        .case_study_by_slug(&slug)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("case study: {slug}")))?;

    Ok(CaseStudyShowTemplate { chrome, case_study })
}

/// Create the case study routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{slug}", get(show))
}
