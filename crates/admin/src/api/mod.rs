//! REST client for the platform's admin API.
//!
//! All endpoints speak HTTP/JSON. Protected calls carry the session's bearer
//! credential in the `Authorization` header; a 401 on such a call means the
//! credential is no longer valid, so the client drops the session before
//! surfacing the error.
//!
//! One resource per module:
//!
//! - `auth` - sign-in
//! - `categories` - category CRUD
//! - `products` - product CRUD
//! - `orders` - order listing and status updates

mod auth;
mod categories;
mod orders;
mod products;

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::DashboardConfig;
use crate::session::SessionStore;

/// Errors that can occur when calling the admin API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network/transport).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// No credential, or the credential was rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Whether a request carries the bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    /// No authorization header.
    Public,
    /// `Authorization: Bearer <token>` from the session store.
    Bearer,
}

/// Admin API client.
///
/// Cheap to clone; all clones share one connection pool and session store.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    config: DashboardConfig,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: DashboardConfig, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                config,
                session,
            }),
        })
    }

    fn url(&self, path: &str) -> String {
        self.inner.config.endpoint(path)
    }

    /// Attach the bearer credential when the call requires it.
    async fn authorize(
        &self,
        request: reqwest::RequestBuilder,
        auth: Auth,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        match auth {
            Auth::Public => Ok(request),
            Auth::Bearer => {
                let token = self.inner.session.token().await.ok_or_else(|| {
                    ApiError::Unauthorized("no credential in session; sign in first".to_string())
                })?;
                Ok(request.header(AUTHORIZATION, token.bearer()))
            }
        }
    }

    /// Execute a GET request.
    async fn get<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T, ApiError> {
        let request = self.inner.client.get(self.url(path));
        let response = self.authorize(request, auth).await?.send().await?;
        self.handle_response(response, auth).await
    }

    /// Execute a POST request.
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let request = self.inner.client.post(self.url(path)).json(body);
        let response = self.authorize(request, auth).await?.send().await?;
        self.handle_response(response, auth).await
    }

    /// Execute a PUT request.
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T, ApiError> {
        let request = self.inner.client.put(self.url(path)).json(body);
        let response = self.authorize(request, auth).await?.send().await?;
        self.handle_response(response, auth).await
    }

    /// Execute a PUT request whose response body is ignored.
    async fn put_unit<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<(), ApiError> {
        let request = self.inner.client.put(self.url(path)).json(body);
        let response = self.authorize(request, auth).await?.send().await?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(self.parse_error(response, auth).await)
    }

    /// Execute a DELETE request.
    async fn delete(&self, path: &str, auth: Auth) -> Result<(), ApiError> {
        let request = self.inner.client.delete(self.url(path));
        let response = self.authorize(request, auth).await?.send().await?;

        let status = response.status();
        if status.is_success() || status.as_u16() == 204 {
            return Ok(());
        }

        Err(self.parse_error(response, auth).await)
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        auth: Auth,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(self.parse_error(response, auth).await)
    }

    /// Map an error response onto the taxonomy.
    async fn parse_error(&self, response: reqwest::Response, auth: Auth) -> ApiError {
        let status = response.status().as_u16();

        if status == 401 {
            // Rejected bearer credential: drop the stale session.
            if auth == Auth::Bearer {
                self.inner.session.invalidate().await;
            }
            return ApiError::Unauthorized("credential rejected by the API".to_string());
        }

        if status == 403 {
            return ApiError::Unauthorized("insufficient permissions".to_string());
        }

        if status == 404 {
            return ApiError::NotFound("resource not found".to_string());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        ApiError::Api { status, message }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.config.api_base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("resource not found".to_string());
        assert_eq!(err.to_string(), "Not found: resource not found");

        let err = ApiError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 - boom");
    }
}
