//! Sign-in and session lifecycle against a mock API.

mod support;

use bodega_admin::api::ApiError;
use bodega_admin::controllers::CategoryController;
use bodega_admin::notify::NotifyLevel;
use bodega_admin::store::Store;
use bodega_core::AuthToken;
use secrecy::SecretString;
use support::Harness;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn sign_in_returns_token() {
    let harness = Harness::start("sign-in").await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/signin"))
        .and(body_json(serde_json::json!({
            "email": "admin@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "tok-abc123"
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let token = harness
        .api
        .sign_in("admin@example.com", &SecretString::from("hunter2"))
        .await
        .expect("sign in");

    assert_eq!(token, AuthToken::new("tok-abc123"));
}

#[tokio::test]
async fn authorized_requests_attach_bearer_token() {
    let harness = Harness::start("bearer").await;
    harness.sign_in_as("tok-abc123").await;

    Mock::given(method("GET"))
        .and(path("/admin/category/get-all-categories"))
        .and(header("Authorization", "Bearer tok-abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&harness.server)
        .await;

    harness
        .api
        .list_categories()
        .await
        .expect("authorized listing");
}

#[tokio::test]
async fn bearer_call_without_session_fails_before_any_request() {
    let harness = Harness::start("no-session").await;

    // No mock mounted: if a request went out, wiremock would 404 and the
    // error kind would differ.
    let error = harness.api.list_categories().await.expect_err("must fail");
    assert!(matches!(error, ApiError::Unauthorized(_)));
}

#[tokio::test]
async fn unauthorized_response_invalidates_session() {
    let harness = Harness::start("invalidate").await;
    harness.sign_in_as("tok-expired").await;

    Mock::given(method("GET"))
        .and(path("/admin/category/get-all-categories"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&harness.server)
        .await;

    let controller = CategoryController::new(harness.api.clone(), Store::new(), harness.notifier());
    controller.load().await;

    // One failure notification, and the rejected credential is gone.
    assert_eq!(harness.notifier.at_level(NotifyLevel::Error).len(), 1);
    assert!(!harness.session.is_authenticated().await);
}

#[tokio::test]
async fn session_survives_restart_via_session_file() {
    let harness = Harness::start("restart").await;
    harness.sign_in_as("tok-persisted").await;

    let reloaded = bodega_admin::session::SessionStore::load(harness.session.path());
    assert_eq!(reloaded.token().await, Some(AuthToken::new("tok-persisted")));
}
