//! The per-request consent store.

use std::collections::HashMap;
use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;

use super::gtag::{ConsentBridge, ConsentGrant, ConsentModeUpdate};
use super::preferences::{ConsentCategory, ConsentStatus, ConsentUpdate, CookiePreferences};

/// Fixed name of the persisted preference record.
pub const PREFERENCES_COOKIE: &str = "cookie-preferences";

/// First-party marker set while the analytics category is enabled.
pub const ANALYTICS_MARKER: &str = "analytics_enabled";

/// First-party marker set while the marketing category is enabled.
pub const MARKETING_MARKER: &str = "marketing_enabled";

/// Known third-party analytics cookies deleted when the category turns off.
const ANALYTICS_VENDOR_COOKIES: &[&str] = &["_ga", "_gid"];

/// Name prefixes that survive [`ConsentStore::clear_non_essential_cookies`]:
/// session, CSRF, and the preference record itself.
const RESERVED_PREFIXES: &[&str] = &["session_", "csrf_", "cookie-"];

/// Lifetime of the record and marker cookies.
const COOKIE_TTL_DAYS: i64 = 365;

/// Single authority over the visitor's cookie-category consent.
///
/// Built from the request's cookie jar, mutated through [`save`], and
/// handed back via [`into_jar`] so the accumulated `Set-Cookie` deltas
/// reach the response. Dropping the store without a save discards nothing:
/// reads never mutate the jar.
///
/// Every operation is infallible. When the jar carries no record, or a
/// record that does not parse, the store behaves as if the visitor had
/// never decided.
///
/// [`save`]: ConsentStore::save
/// [`into_jar`]: ConsentStore::into_jar
pub struct ConsentStore {
    prefs: CookiePreferences,
    jar: CookieJar,
    bridge: Option<Arc<dyn ConsentBridge>>,
}

impl ConsentStore {
    /// Build a store from the request's cookie jar.
    #[must_use]
    pub fn from_jar(jar: CookieJar) -> Self {
        let prefs = jar
            .get(PREFERENCES_COOKIE)
            .and_then(|cookie| CookiePreferences::from_json(cookie.value()))
            .unwrap_or_default();

        Self {
            prefs,
            jar,
            bridge: None,
        }
    }

    /// Attach the optional third-party consent collaborator.
    #[must_use]
    pub fn with_bridge(mut self, bridge: Arc<dyn ConsentBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// The current in-memory preferences.
    #[must_use]
    pub const fn preferences(&self) -> CookiePreferences {
        self.prefs
    }

    /// Whether a category is currently allowed. Essential always is.
    #[must_use]
    pub const fn is_allowed(&self, category: ConsentCategory) -> bool {
        self.prefs.allows(category)
    }

    /// `true` iff the visitor has ever saved an explicit choice.
    #[must_use]
    pub const fn has_user_consented(&self) -> bool {
        self.prefs.has_consent()
    }

    /// Derived classification of the current record.
    #[must_use]
    pub const fn status(&self) -> ConsentStatus {
        self.prefs.status()
    }

    /// Merge an update over the current state, stamp the timestamp, persist
    /// the full record, then apply side effects.
    ///
    /// The record cookie is written before side effects so an effect
    /// misbehaving cannot lose the saved choice. Essential is forced on
    /// regardless of input.
    pub fn save(&mut self, update: ConsentUpdate) {
        self.save_with_now(update, Utc::now().timestamp_millis());
    }

    fn save_with_now(&mut self, update: ConsentUpdate, now_ms: i64) {
        if let Some(analytics) = update.analytics {
            self.prefs.analytics = analytics;
        }
        if let Some(marketing) = update.marketing {
            self.prefs.marketing = marketing;
        }
        self.prefs.essential = true;
        self.prefs.timestamp = now_ms;

        let record = self.prefs.to_json();
        self.set_cookie(PREFERENCES_COOKIE, &record);

        self.apply_effects();
    }

    /// Replace the record with defaults and save them.
    ///
    /// Deliberately re-stamps the timestamp, so a reset reads as an
    /// explicit essential-only choice and the banner stays suppressed.
    /// Clearing `timestamp` here instead would re-arm the banner.
    pub fn reset(&mut self) {
        self.prefs = CookiePreferences::default();
        self.save(ConsentUpdate::default());
    }

    /// Name-to-value view of every cookie in the ambient jar.
    ///
    /// Read-only diagnostic; duplicate names collapse last-write-wins and
    /// values are whitespace-trimmed.
    #[must_use]
    pub fn all_cookies(&self) -> HashMap<String, String> {
        self.jar
            .iter()
            .map(|cookie| {
                (
                    cookie.name().trim().to_owned(),
                    cookie.value().trim().to_owned(),
                )
            })
            .collect()
    }

    /// Delete every cookie whose name does not carry a reserved prefix.
    ///
    /// Blunt by design: this ignores the category flags entirely and wipes
    /// anything that is not a session, CSRF, or preference cookie.
    pub fn clear_non_essential_cookies(&mut self) {
        let doomed: Vec<String> = self
            .all_cookies()
            .into_keys()
            .filter(|name| !RESERVED_PREFIXES.iter().any(|prefix| name.starts_with(prefix)))
            .collect();

        for name in doomed {
            self.remove_cookie(&name);
        }
    }

    /// Consume the store and hand the jar back for the response.
    #[must_use]
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }

    /// Re-apply side effects for each optional category.
    fn apply_effects(&mut self) {
        // Essential cookies are created by the server itself; activation is
        // a no-op here.
        if self.prefs.analytics {
            self.enable_analytics();
        } else {
            self.disable_analytics();
        }

        if self.prefs.marketing {
            self.enable_marketing();
        } else {
            self.disable_marketing();
        }
    }

    fn enable_analytics(&mut self) {
        self.set_cookie(ANALYTICS_MARKER, "true");
        self.notify_bridge(ConsentGrant::Granted);
    }

    fn disable_analytics(&mut self) {
        self.remove_cookie(ANALYTICS_MARKER);
        for name in ANALYTICS_VENDOR_COOKIES {
            self.remove_cookie(name);
        }
        self.notify_bridge(ConsentGrant::Denied);
    }

    fn enable_marketing(&mut self) {
        self.set_cookie(MARKETING_MARKER, "true");
    }

    fn disable_marketing(&mut self) {
        self.remove_cookie(MARKETING_MARKER);
    }

    fn notify_bridge(&self, grant: ConsentGrant) {
        if let Some(bridge) = &self.bridge {
            bridge.update(ConsentModeUpdate {
                analytics_storage: grant,
            });
        }
    }

    /// First-party cookie attributes: path `/`, `SameSite=Lax`, 365 days.
    /// Not `Secure`/`HttpOnly` - these are client-readable by design.
    fn set_cookie(&mut self, name: &str, value: &str) {
        let cookie = Cookie::build((name.to_owned(), value.to_owned()))
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(time::Duration::days(COOKIE_TTL_DAYS))
            .build();

        let jar = std::mem::take(&mut self.jar);
        self.jar = jar.add(cookie);
    }

    fn remove_cookie(&mut self, name: &str) {
        let removal = Cookie::build((name.to_owned(), String::new()))
            .path("/")
            .build();

        let jar = std::mem::take(&mut self.jar);
        self.jar = jar.remove(removal);
    }
}
