//! Cookie-consent preference management.
//!
//! The single authority for reading, mutating, persisting, and reacting to
//! the visitor's cookie-category choices. The persisted record is a JSON
//! document in a first-party cookie (`cookie-preferences`), carried on
//! every request; a [`ConsentStore`] is built per request from the incoming
//! cookie jar and flushed back into the response, so the only durable state
//! lives in the visitor's browser.
//!
//! Two presentation surfaces consume this module: the banner partial
//! rendered on every page until a choice is made, and the `/cookie-settings`
//! page. Both go through the store's contract; neither touches cookies
//! directly.
//!
//! Every operation is best-effort and infallible. A missing or malformed
//! record is treated as "no choice yet" and falls back to defaults.

pub mod gtag;
pub mod preferences;
pub mod store;
pub mod view;

pub use gtag::{ConsentBridge, ConsentGrant, ConsentModeUpdate, GtagConsentMode};
pub use preferences::{ConsentCategory, ConsentStatus, ConsentUpdate, CookiePreferences};
pub use store::ConsentStore;
pub use view::PageChrome;
