//! Application state shared across the dashboard.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::config::DashboardConfig;
use crate::models::{Category, Order, Product};
use crate::session::SessionStore;
use crate::store::{DashboardCounts, Store};

/// Everything a dashboard surface needs, wired once at startup.
///
/// Cheap to clone; all clones share the same session, client and stores.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DashboardConfig,
    session: Arc<SessionStore>,
    api: ApiClient,
    categories: Store<Category>,
    products: Store<Product>,
    orders: Store<Order>,
}

impl AppState {
    /// Build the state from configuration: load the persisted session and
    /// wire the API client and empty entity stores.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the HTTP client fails to build.
    pub fn initialize(config: DashboardConfig) -> Result<Self, ApiError> {
        let session = Arc::new(SessionStore::load(&config.session_file));
        let api = ApiClient::new(config.clone(), Arc::clone(&session))?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                session,
                api,
                categories: Store::new(),
                products: Store::new(),
                orders: Store::new(),
            }),
        })
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// The session store.
    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.inner.session
    }

    /// The API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// The category store.
    #[must_use]
    pub fn categories(&self) -> &Store<Category> {
        &self.inner.categories
    }

    /// The product store.
    #[must_use]
    pub fn products(&self) -> &Store<Product> {
        &self.inner.products
    }

    /// The order store.
    #[must_use]
    pub fn orders(&self) -> &Store<Order> {
        &self.inner.orders
    }

    /// Aggregate counts for the dashboard tiles.
    pub async fn counts(&self) -> DashboardCounts {
        DashboardCounts::collect(
            &self.inner.categories,
            &self.inner.products,
            &self.inner.orders,
        )
        .await
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("base_url", &self.inner.config.api_base_url.as_str())
            .finish_non_exhaustive()
    }
}
