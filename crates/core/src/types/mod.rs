//! Core types for Bodega.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod id;
pub mod status;

pub use credential::AuthToken;
pub use id::*;
pub use status::*;
