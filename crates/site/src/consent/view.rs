//! Read-only consent state for page rendering.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use super::gtag::ConsentGrant;
use super::preferences::{ConsentCategory, ConsentStatus, CookiePreferences};
use super::store::ConsentStore;
use crate::state::AppState;

/// Everything the base template needs: whether to show the consent banner,
/// the current preferences, and the consent-mode state for the analytics
/// tag. Extracted from the request cookies on every page render; reads
/// never mutate the jar.
#[derive(Debug, Clone)]
pub struct PageChrome {
    pub show_banner: bool,
    pub preferences: CookiePreferences,
    pub status: ConsentStatus,
    pub ga4_measurement_id: Option<String>,
    pub analytics_storage: ConsentGrant,
    /// Path of the current request, echoed by the banner forms so the
    /// visitor lands back on the page they decided from.
    pub current_path: String,
}

impl FromRequestParts<AppState> for PageChrome {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let store = ConsentStore::from_jar(jar);

        Ok(Self {
            show_banner: !store.has_user_consented(),
            preferences: store.preferences(),
            status: store.status(),
            ga4_measurement_id: state.config().analytics.ga4_measurement_id.clone(),
            analytics_storage: ConsentGrant::from_bool(
                store.is_allowed(ConsentCategory::Analytics),
            ),
            current_path: parts.uri.path().to_owned(),
        })
    }
}
