//! Core types for the Embrion website.

pub mod content;
pub mod email;

pub use content::{CaseStudy, Metric, Pricing, Product, Service, ServiceCategory};
pub use email::{Email, EmailError};
