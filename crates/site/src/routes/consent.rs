//! Cookie consent route handlers.
//!
//! Two surfaces consume the consent store: the banner rendered on every
//! page until a choice is made (accept-all / essential-only / reject-all
//! form actions), and the standalone `/cookie-settings` page with
//! per-category toggles, save, and reset. Every mutation rebuilds the
//! store from the request jar, saves, and flushes the jar back so the
//! `Set-Cookie` deltas reach the response.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::State,
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use axum_extra::extract::CookieJar;
use chrono::DateTime;
use serde::Deserialize;
use tracing::instrument;

use crate::consent::{ConsentStore, ConsentUpdate, PageChrome};
use crate::filters;
use crate::state::AppState;

/// Cookie settings page template.
#[derive(Template, WebTemplate)]
#[template(path = "consent/settings.html")]
pub struct CookieSettingsTemplate {
    pub chrome: PageChrome,
    /// Date of the last save, if any, preformatted for display.
    pub last_updated: Option<String>,
}

/// Settings form payload. Checkboxes only appear in the body when
/// checked, so presence is the value.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub analytics: Option<String>,
    #[serde(default)]
    pub marketing: Option<String>,
}

/// Banner form payload: the page to return to after the choice.
#[derive(Debug, Deserialize)]
pub struct BannerForm {
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Display the cookie settings page.
#[instrument(skip(chrome))]
pub async fn settings(chrome: PageChrome) -> impl IntoResponse {
    let last_updated = DateTime::from_timestamp_millis(chrome.preferences.timestamp)
        .filter(|_| chrome.preferences.timestamp > 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string());

    CookieSettingsTemplate {
        chrome,
        last_updated,
    }
}

/// Save preferences from the settings page.
#[instrument(skip(state, jar))]
pub async fn save(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SettingsForm>,
) -> impl IntoResponse {
    let update = ConsentUpdate {
        analytics: Some(form.analytics.is_some()),
        marketing: Some(form.marketing.is_some()),
    };

    let mut store = store_for(&state, jar);
    store.save(update);
    tracing::info!(status = %store.status(), "cookie preferences saved");

    (store.into_jar(), Redirect::to("/cookie-settings"))
}

/// Reset preferences to defaults from the settings page.
#[instrument(skip(state, jar))]
pub async fn reset(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let mut store = store_for(&state, jar);
    store.reset();
    tracing::info!("cookie preferences reset to defaults");

    (store.into_jar(), Redirect::to("/cookie-settings"))
}

/// Wipe every cookie outside the reserved session/CSRF/preference set.
///
/// Independent of the category flags; the preference record itself
/// survives because its name carries a reserved prefix.
#[instrument(skip(state, jar))]
pub async fn clear_cookies(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let mut store = store_for(&state, jar);
    store.clear_non_essential_cookies();
    tracing::info!("non-essential cookies cleared");

    (store.into_jar(), Redirect::to("/cookie-settings"))
}

/// Banner action: accept every category.
#[instrument(skip(state, jar, form))]
pub async fn accept_all(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<BannerForm>,
) -> impl IntoResponse {
    apply_banner_choice(&state, jar, ConsentUpdate::accept_all(), form.return_to)
}

/// Banner action: keep essential cookies only.
#[instrument(skip(state, jar, form))]
pub async fn essential_only(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<BannerForm>,
) -> impl IntoResponse {
    apply_banner_choice(&state, jar, ConsentUpdate::essential_only(), form.return_to)
}

/// Banner action: reject every optional category.
///
/// Identical in effect to [`essential_only`]; the banner offers both
/// phrasings and the record cannot tell them apart.
#[instrument(skip(state, jar, form))]
pub async fn reject_all(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<BannerForm>,
) -> impl IntoResponse {
    apply_banner_choice(&state, jar, ConsentUpdate::essential_only(), form.return_to)
}

fn apply_banner_choice(
    state: &AppState,
    jar: CookieJar,
    update: ConsentUpdate,
    return_to: Option<String>,
) -> (CookieJar, Redirect) {
    let mut store = store_for(state, jar);
    store.save(update);
    tracing::info!(status = %store.status(), "consent banner choice saved");

    let target = redirect_target(return_to);
    (store.into_jar(), Redirect::to(&target))
}

fn store_for(state: &AppState, jar: CookieJar) -> ConsentStore {
    let store = ConsentStore::from_jar(jar);
    match state.consent_bridge() {
        Some(bridge) => store.with_bridge(bridge),
        None => store,
    }
}

/// Only same-site paths are honored; anything else goes home.
fn redirect_target(return_to: Option<String>) -> String {
    return_to
        .filter(|t| t.starts_with('/') && !t.starts_with("//"))
        .unwrap_or_else(|| "/".to_owned())
}

/// Create the consent routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/consent/accept-all", post(accept_all))
        .route("/consent/essential", post(essential_only))
        .route("/consent/reject-all", post(reject_all))
        .route("/cookie-settings", get(settings).post(save))
        .route("/cookie-settings/reset", post(reset))
        .route("/cookie-settings/clear-cookies", post(clear_cookies))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_target_keeps_local_paths() {
        assert_eq!(
            redirect_target(Some("/products/medsync".to_owned())),
            "/products/medsync"
        );
    }

    #[test]
    fn test_redirect_target_rejects_external() {
        assert_eq!(redirect_target(Some("https://evil.example".to_owned())), "/");
        assert_eq!(redirect_target(Some("//evil.example".to_owned())), "/");
        assert_eq!(redirect_target(None), "/");
    }
}
