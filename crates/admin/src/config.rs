//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BODEGA_API_BASE_URL` - Base URL of the platform's admin API
//!   (e.g., <https://api.example.org/api/v1>)
//!
//! ## Optional
//! - `BODEGA_SESSION_FILE` - Path of the persisted session file
//!   (default: `.bodega-session.json`)
//! - `BODEGA_TIMEOUT_SECS` - Request timeout in seconds (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_SESSION_FILE: &str = ".bodega-session.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the admin API; endpoint paths are joined onto this.
    pub api_base_url: Url,
    /// Where the bearer credential is persisted between runs.
    pub session_file: PathBuf,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_required_env("BODEGA_API_BASE_URL")?;
        let api_base_url = Url::parse(api_base_url.trim_end_matches('/')).map_err(|e| {
            ConfigError::InvalidEnvVar("BODEGA_API_BASE_URL".to_string(), e.to_string())
        })?;

        let session_file =
            PathBuf::from(get_env_or_default("BODEGA_SESSION_FILE", DEFAULT_SESSION_FILE));

        let timeout_secs = match std::env::var("BODEGA_TIMEOUT_SECS") {
            Ok(value) => value.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("BODEGA_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url,
            session_file,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Build a configuration directly, for embedding and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `api_base_url` is not a valid URL.
    pub fn new(api_base_url: &str, session_file: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let api_base_url = Url::parse(api_base_url.trim_end_matches('/'))
            .map_err(|e| ConfigError::InvalidEnvVar("api_base_url".to_string(), e.to_string()))?;
        Ok(Self {
            api_base_url,
            session_file: session_file.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Join an endpoint path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
