//! Static company pages: about, features, investors.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::consent::PageChrome;
use crate::filters;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub chrome: PageChrome,
}

/// Features overview template.
#[derive(Template, WebTemplate)]
#[template(path = "features.html")]
pub struct FeaturesTemplate {
    pub chrome: PageChrome,
}

/// Investor relations template.
#[derive(Template, WebTemplate)]
#[template(path = "investors.html")]
pub struct InvestorsTemplate {
    pub chrome: PageChrome,
}

/// Display the About page.
#[instrument(skip(chrome))]
pub async fn about(chrome: PageChrome) -> impl IntoResponse {
    AboutTemplate { chrome }
}

/// Display the Features page.
#[instrument(skip(chrome))]
pub async fn features(chrome: PageChrome) -> impl IntoResponse {
    FeaturesTemplate { chrome }
}

/// Display the Investors page.
#[instrument(skip(chrome))]
pub async fn investors(chrome: PageChrome) -> impl IntoResponse {
    InvestorsTemplate { chrome }
}
