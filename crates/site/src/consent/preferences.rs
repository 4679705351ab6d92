//! The consent preference record and its derived classifications.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The visitor's cookie-category choices.
///
/// This is the persisted record: one JSON document per browser, stored
/// under the `cookie-preferences` cookie. `essential` is always `true` in
/// any in-memory or persisted representation; the stored value is ignored
/// on read. `timestamp` is epoch milliseconds of the last save and is the
/// sole signal of "has the visitor made a choice" - `0` means undecided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    #[serde(default = "default_true")]
    pub essential: bool,
    #[serde(default)]
    pub analytics: bool,
    #[serde(default)]
    pub marketing: bool,
    #[serde(default)]
    pub timestamp: i64,
}

const fn default_true() -> bool {
    true
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self {
            essential: true,
            analytics: false,
            marketing: false,
            timestamp: 0,
        }
    }
}

impl CookiePreferences {
    /// Parse a persisted record, coercing `essential` back to `true`.
    ///
    /// Returns `None` for unparseable input; callers substitute defaults,
    /// which is the required treatment of a malformed record.
    #[must_use]
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str::<Self>(raw).ok().map(Self::normalized)
    }

    /// Serialize the full record for persistence.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Force the invariant `essential == true`.
    #[must_use]
    pub const fn normalized(mut self) -> Self {
        self.essential = true;
        self
    }

    /// Whether the visitor has ever made an explicit choice.
    #[must_use]
    pub const fn has_consent(&self) -> bool {
        self.timestamp > 0
    }

    /// Whether a category is currently allowed. Essential always is.
    #[must_use]
    pub const fn allows(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Essential => true,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
        }
    }

    /// Derive the display classification for the current record.
    ///
    /// The check order matters: all, then analytics, then marketing, then
    /// essential. A marketing-only record therefore classifies as
    /// [`ConsentStatus::Marketing`], which the settings UI renders with the
    /// essential-tier label (the source UI has no dedicated text for it).
    #[must_use]
    pub const fn status(&self) -> ConsentStatus {
        if !self.has_consent() {
            ConsentStatus::NotSet
        } else if self.analytics && self.marketing {
            ConsentStatus::All
        } else if self.analytics {
            ConsentStatus::Analytics
        } else if self.marketing {
            ConsentStatus::Marketing
        } else {
            ConsentStatus::Essential
        }
    }
}

/// One of the three user-facing cookie classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentCategory {
    Essential,
    Analytics,
    Marketing,
}

impl ConsentCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Analytics => "analytics",
            Self::Marketing => "marketing",
        }
    }
}

impl fmt::Display for ConsentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived, order-sensitive consent classification for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsentStatus {
    NotSet,
    All,
    Analytics,
    Marketing,
    Essential,
}

impl ConsentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotSet => "not-set",
            Self::All => "all",
            Self::Analytics => "analytics",
            Self::Marketing => "marketing",
            Self::Essential => "essential",
        }
    }

    /// Human-readable label for the settings page status chip.
    ///
    /// Marketing-only shares the essential-tier text; the status value
    /// itself stays distinct.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotSet => "Not Set",
            Self::All => "All Cookies Accepted",
            Self::Analytics => "Analytics Only",
            Self::Marketing | Self::Essential => "Essential Only",
        }
    }
}

impl fmt::Display for ConsentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A partial update to the optional categories.
///
/// Callers only ever send the two user-settable booleans; `essential` is
/// not part of the update surface and `timestamp` is stamped by the store.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ConsentUpdate {
    pub analytics: Option<bool>,
    pub marketing: Option<bool>,
}

impl ConsentUpdate {
    /// Update accepting every optional category.
    #[must_use]
    pub const fn accept_all() -> Self {
        Self {
            analytics: Some(true),
            marketing: Some(true),
        }
    }

    /// Update declining every optional category.
    #[must_use]
    pub const fn essential_only() -> Self {
        Self {
            analytics: Some(false),
            marketing: Some(false),
        }
    }
}
