//! Admin sign-in.

use bodega_core::AuthToken;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{ApiClient, ApiError, Auth};

const SIGNIN: &str = "/admin/auth/signin";

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    token: AuthToken,
}

impl ApiClient {
    /// Exchange admin credentials for a bearer token.
    ///
    /// The caller decides what to do with the token (normally: store it in
    /// the session so subsequent calls are authorized).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are rejected.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthToken, ApiError> {
        let body = SignInRequest {
            email,
            password: password.expose_secret(),
        };

        let response: SignInResponse = self.post(SIGNIN, &body, Auth::Public).await?;
        Ok(response.token)
    }
}
