//! Embrion Core - Shared types library.
//!
//! This crate provides the common types used across the Embrion website:
//! content catalog entries (services, products, case studies) and small
//! validated value types such as [`Email`].
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no rendering.
//! This keeps it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
