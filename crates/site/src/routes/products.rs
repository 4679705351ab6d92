//! Product catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use embrion_core::Product;
use tracing::instrument;

use crate::consent::PageChrome;
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductIndexTemplate {
    pub chrome: PageChrome,
    pub products: Vec<Product>,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub chrome: PageChrome,
    pub product: Product,
}

/// Display the product listing.
#[instrument(skip(state, chrome))]
pub async fn index(State(state): State<AppState>, chrome: PageChrome) -> impl IntoResponse {
    ProductIndexTemplate {
        chrome,
        products: state.catalog().products().to_vec(),
    }
}

/// Display a single product by slug.
///
/// # Errors
///
/// Returns 404 if no product has the given slug.
#[instrument(skip(state, chrome))]
pub async fn show(
    State(state): State<AppState>,
    chrome: PageChrome,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product = state
        .catalog()
        .product_by_slug(&slug)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product: {slug}")))?;

    Ok(ProductShowTemplate { chrome, product })
}

/// Create the product routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{slug}", get(show))
}
