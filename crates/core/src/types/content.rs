//! Content catalog types.
//!
//! These describe the static marketing content the site serves: the
//! services Embrion offers, the products it has shipped, and published
//! case studies. The data itself lives in the site crate; this module
//! only defines the shapes.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Broad grouping for a service offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Marketing,
    Development,
    Consulting,
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Marketing => "Marketing",
            Self::Development => "Development",
            Self::Consulting => "Consulting",
        };
        write!(f, "{label}")
    }
}

/// A service offering listed on the services pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// One-line pitch used on listing cards.
    pub summary: String,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub icon: Option<String>,
    pub category: ServiceCategory,
    #[serde(default)]
    pub featured: bool,
}

/// Pricing tier shown on a product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pricing {
    Free,
    Paid,
    Enterprise,
    #[serde(rename = "Contact Sales")]
    ContactSales,
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Free => "Free",
            Self::Paid => "Paid",
            Self::Enterprise => "Enterprise",
            Self::ContactSales => "Contact Sales",
        };
        write!(f, "{label}")
    }
}

/// A shipped product listed on the products pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub features: Vec<String>,
    pub benefits: Vec<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    pub pricing: Pricing,
    #[serde(default)]
    pub featured: bool,
}

/// A single headline metric in a case study.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
    pub change: String,
}

/// A published client case study.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub description: String,
    pub client: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Free-form grouping (healthcare, fintech, education, ...).
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    pub published_at: NaiveDate,
}
