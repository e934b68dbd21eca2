//! Session management commands.
//!
//! # Usage
//!
//! ```bash
//! # Sign in; the token is persisted to the session file
//! bodega login -e admin@example.com -p 'secret'
//!
//! # Sign out; the session file is removed
//! bodega logout
//! ```
//!
//! # Environment Variables
//!
//! - `BODEGA_ADMIN_PASSWORD` - password fallback when `--password` is omitted

use secrecy::SecretString;

use super::{CommandError, app_state};

/// Sign in and persist the bearer token.
pub async fn login(email: &str, password: Option<String>) -> Result<(), CommandError> {
    // Basic email validation
    if !email.contains('@') || !email.contains('.') {
        return Err(CommandError::InvalidEmail(email.to_owned()));
    }

    let password = password
        .or_else(|| std::env::var("BODEGA_ADMIN_PASSWORD").ok())
        .ok_or(CommandError::MissingPassword)?;
    let password = SecretString::from(password);

    let state = app_state()?;
    let token = state.api().sign_in(email, &password).await?;
    state.session().set(token).await?;

    tracing::info!("Signed in as {email}");
    tracing::info!("Session persisted to {}", state.session().path().display());
    Ok(())
}

/// Drop the persisted session.
pub async fn logout() -> Result<(), CommandError> {
    let state = app_state()?;

    if !state.session().is_authenticated().await {
        tracing::info!("No active session");
        return Ok(());
    }

    state.session().clear().await?;
    tracing::info!("Signed out");
    Ok(())
}
