//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use embrion_core::{CaseStudy, Product, Service};
use tracing::instrument;

use crate::consent::PageChrome;
use crate::filters;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: PageChrome,
    /// Services flagged for the home page.
    pub featured_services: Vec<Service>,
    /// Products flagged for the home page.
    pub featured_products: Vec<Product>,
    /// Case studies flagged for the home page.
    pub featured_case_studies: Vec<CaseStudy>,
}

/// Display the home page.
#[instrument(skip(state, chrome))]
pub async fn home(State(state): State<AppState>, chrome: PageChrome) -> impl IntoResponse {
    let catalog = state.catalog();

    HomeTemplate {
        chrome,
        featured_services: catalog.featured_services().cloned().collect(),
        featured_products: catalog.featured_products().cloned().collect(),
        featured_case_studies: catalog.featured_case_studies().cloned().collect(),
    }
}
