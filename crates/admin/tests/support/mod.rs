//! Shared harness for controller tests.
//!
//! Wires a real [`ApiClient`] against a wiremock server, with a throwaway
//! session file and a recording notifier.

use std::path::PathBuf;
use std::sync::Arc;

use bodega_admin::api::ApiClient;
use bodega_admin::config::DashboardConfig;
use bodega_admin::notify::RecordingNotifier;
use bodega_admin::session::SessionStore;
use bodega_core::AuthToken;
use wiremock::MockServer;

pub struct Harness {
    pub server: MockServer,
    pub api: ApiClient,
    pub session: Arc<SessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    session_file: PathBuf,
}

impl Harness {
    /// Start a mock server and wire a client against it.
    ///
    /// `name` keeps session files of concurrently running tests apart.
    pub async fn start(name: &str) -> Self {
        let server = MockServer::start().await;

        let session_file = std::env::temp_dir().join(format!(
            "bodega-test-session-{name}-{}.json",
            std::process::id()
        ));
        let session = Arc::new(SessionStore::unauthenticated(&session_file));

        let config = DashboardConfig::new(&server.uri(), &session_file)
            .expect("mock server uri is a valid base url");
        let api = ApiClient::new(config, Arc::clone(&session)).expect("build client");

        Self {
            server,
            api,
            session,
            notifier: Arc::new(RecordingNotifier::new()),
            session_file,
        }
    }

    /// Put a credential in the session, as if signed in.
    pub async fn sign_in_as(&self, token: &str) {
        self.session
            .set(AuthToken::new(token))
            .await
            .expect("persist test session");
    }

    /// The notifier as the trait object controllers take.
    pub fn notifier(&self) -> Arc<RecordingNotifier> {
        Arc::clone(&self.notifier)
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.session_file);
    }
}
