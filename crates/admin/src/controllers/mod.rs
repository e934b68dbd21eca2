//! CRUD view-controllers.
//!
//! One controller per management screen. Each owns the orchestration the
//! screen needs - fetch-on-mount (`load`), presence-validated `create`,
//! confirm-then-commit `update`/`delete` - against injected collaborators:
//! the [`crate::api::ApiClient`], the screen's [`crate::store::Store`], and a
//! [`crate::notify::Notifier`].
//!
//! Error discipline: every remote failure is caught at the call site, logged,
//! and converted into exactly one user-visible error notification; the store
//! keeps its previous contents (stale-but-available). Stores are patched only
//! after the server confirms a mutation.

mod category;
mod order;
mod product;

pub use category::CategoryController;
pub use order::OrderController;
pub use product::ProductController;

use thiserror::Error;

/// Client-side validation failure (presence checks only).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or missing.
    #[error("{0} is required")]
    Missing(&'static str),
}
