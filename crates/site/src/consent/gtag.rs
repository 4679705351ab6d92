//! Google consent-mode bridge.
//!
//! The store notifies an optional third-party consent collaborator after
//! every save. On the original site this was a `gtag('consent', 'update',
//! {analytics_storage})` call against a global that might not be loaded;
//! here the collaborator is a trait object that is simply absent when no
//! tag is configured, and the grant state also feeds the consent-mode
//! snippet the base template renders.

use core::fmt;

/// Grant state for a consent-mode storage field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentGrant {
    Granted,
    Denied,
}

impl ConsentGrant {
    #[must_use]
    pub const fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Granted } else { Self::Denied }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for ConsentGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command-style consent update, mirroring the consent-mode API shape.
#[derive(Debug, Clone, Copy)]
pub struct ConsentModeUpdate {
    pub analytics_storage: ConsentGrant,
}

/// Optional third-party consent collaborator.
///
/// Called opportunistically after side effects are applied; when no
/// implementation is registered the store skips the call entirely.
pub trait ConsentBridge: Send + Sync {
    fn update(&self, update: ConsentModeUpdate);
}

/// Consent-mode bridge for a configured Google tag.
#[derive(Debug, Clone)]
pub struct GtagConsentMode {
    measurement_id: String,
}

impl GtagConsentMode {
    #[must_use]
    pub fn new(measurement_id: impl Into<String>) -> Self {
        Self {
            measurement_id: measurement_id.into(),
        }
    }

    /// The GA4 measurement id this bridge was configured with.
    #[must_use]
    pub fn measurement_id(&self) -> &str {
        &self.measurement_id
    }
}

impl ConsentBridge for GtagConsentMode {
    fn update(&self, update: ConsentModeUpdate) {
        tracing::debug!(
            measurement_id = %self.measurement_id,
            analytics_storage = update.analytics_storage.as_str(),
            "consent mode update"
        );
    }
}
