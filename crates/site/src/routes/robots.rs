//! robots.txt route handler.

use axum::extract::State;

use crate::state::AppState;

/// Serve robots.txt.
///
/// Everything on the site is public; crawlers are welcome everywhere
/// except the consent endpoints, which are meaningless to index.
pub async fn robots_txt(State(state): State<AppState>) -> String {
    let base_url = state.config().base_url.trim_end_matches('/');
    format!(
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /consent/\n\
         Disallow: /cookie-settings\n\
         \n\
         Host: {base_url}\n"
    )
}
