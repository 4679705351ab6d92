//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::consent::{ConsentBridge, GtagConsentMode};
use crate::content::ContentStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the configuration, the markdown
/// content store, the static content catalogs, and the optional consent
/// bridge for the analytics tag. There is no database and no per-visitor
/// state here; everything per-visitor lives in their cookie jar.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    content: ContentStore,
    catalog: Catalog,
    consent_bridge: Option<Arc<dyn ConsentBridge>>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The consent bridge is materialized only when an analytics tag is
    /// configured; without one the store has no collaborator to notify.
    #[must_use]
    pub fn new(config: SiteConfig, content: ContentStore) -> Self {
        let consent_bridge: Option<Arc<dyn ConsentBridge>> = config
            .analytics
            .ga4_measurement_id
            .as_deref()
            .map(|id| Arc::new(GtagConsentMode::new(id)) as Arc<dyn ConsentBridge>);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                content,
                catalog: Catalog::new(),
                consent_bridge,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the markdown content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Get a reference to the static content catalogs.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// The optional third-party consent collaborator.
    #[must_use]
    pub fn consent_bridge(&self) -> Option<Arc<dyn ConsentBridge>> {
        self.inner.consent_bridge.clone()
    }
}
