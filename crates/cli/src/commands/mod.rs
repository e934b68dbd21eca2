//! CLI command implementations.
//!
//! Each command builds the shared [`AppState`] from the environment, wires
//! the controller it needs with a tracing-backed notifier, and reports
//! through `tracing`.

pub mod auth;
pub mod category;
pub mod dashboard;
pub mod order;
pub mod product;

use std::sync::Arc;

use bodega_admin::api::ApiError;
use bodega_admin::config::{ConfigError, DashboardConfig};
use bodega_admin::notify::{Notifier, TracingNotifier};
use bodega_admin::session::SessionError;
use bodega_admin::state::AppState;
use bodega_admin::table::SortDirection;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// API call failed during command setup.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Session file could not be read or written.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// No password given and `BODEGA_ADMIN_PASSWORD` is unset.
    #[error("missing password: pass --password or set BODEGA_ADMIN_PASSWORD")]
    MissingPassword,

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Price argument is not a decimal.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Status argument is not a known lifecycle label.
    #[error("{0}")]
    InvalidStatus(String),

    /// Image file could not be read.
    #[error("Failed to read image file: {0}")]
    Image(#[from] std::io::Error),
}

/// Build the application state from the environment.
pub(crate) fn app_state() -> Result<AppState, CommandError> {
    let config = DashboardConfig::from_env()?;
    Ok(AppState::initialize(config)?)
}

/// The notifier every CLI-driven controller reports through.
pub(crate) fn notifier() -> Arc<dyn Notifier> {
    Arc::new(TracingNotifier)
}

/// Translate `--sort <key> [--desc]` into a table sort.
pub(crate) fn sort_spec(sort: Option<&str>, desc: bool) -> Option<(&str, SortDirection)> {
    sort.map(|key| {
        let direction = if desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        (key, direction)
    })
}
