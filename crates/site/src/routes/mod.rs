//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Home page
//! GET  /health                  - Health check
//!
//! # Company
//! GET  /about                   - About page
//! GET  /features                - Platform features overview
//! GET  /investors               - Investor relations
//!
//! # Catalogs
//! GET  /services                - Service listing
//! GET  /services/{slug}         - Service detail
//! GET  /products                - Product listing
//! GET  /products/{slug}         - Product detail
//! GET  /case-studies            - Case study listing
//! GET  /case-studies/{slug}     - Case study detail
//!
//! # Legal (markdown-backed)
//! GET  /privacy                 - Privacy policy
//! GET  /terms                   - Terms of service
//! GET  /cookies                 - Cookie policy
//!
//! # Contact & leads
//! GET  /contact                 - Contact page
//! POST /contact                 - Contact form submission
//! POST /api/lead                - Lead capture API (JSON, rate limited)
//!
//! # Cookie consent
//! POST /consent/accept-all      - Banner: accept every category
//! POST /consent/essential       - Banner: essential only
//! POST /consent/reject-all      - Banner: reject optional categories
//! GET  /cookie-settings         - Preference management page
//! POST /cookie-settings         - Save preferences
//! POST /cookie-settings/reset   - Reset preferences to defaults
//! POST /cookie-settings/clear-cookies - Wipe non-essential cookies
//! ```

pub mod case_studies;
pub mod company;
pub mod consent;
pub mod contact;
pub mod home;
pub mod lead;
pub mod pages;
pub mod products;
pub mod robots;
pub mod services;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Company pages
        .route("/about", get(company::about))
        .route("/features", get(company::features))
        .route("/investors", get(company::investors))
        // Contact page + form
        .route("/contact", get(contact::show).post(contact::submit))
        // Catalog routes
        .nest("/services", services::router())
        .nest("/products", products::router())
        .nest("/case-studies", case_studies::router())
        // Legal pages
        .merge(pages::router())
        // Cookie consent surfaces
        .merge(consent::router())
        // Lead capture API (rate limited)
        .merge(lead::router())
        // Crawlers
        .route("/robots.txt", get(robots::robots_txt))
}
