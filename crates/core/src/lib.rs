//! Bodega Core - Shared types library.
//!
//! This crate provides common types used across all Bodega components:
//! - `admin` - Dashboard library (API client, stores, controllers)
//! - `cli` - Command-line surface driving the dashboard
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the bearer
//!   credential, plus the order status lifecycle

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
