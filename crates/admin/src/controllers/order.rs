//! Order management.

use std::sync::Arc;

use bodega_core::{OrderId, OrderStatus, TransitionPolicy};

use crate::api::ApiClient;
use crate::models::Order;
use crate::notify::Notifier;
use crate::store::Store;
use crate::table::{SortDirection, filter_rows, sort_rows};

/// Columns the order screen searches.
const SEARCH_FIELDS: &[&str] = &["id", "customer"];

/// View-controller for the order screen.
///
/// Orders are never created or deleted here; the ordering subsystem owns
/// that. This screen lists orders and moves them through the status
/// lifecycle.
pub struct OrderController {
    api: ApiClient,
    store: Store<Order>,
    notifier: Arc<dyn Notifier>,
    policy: TransitionPolicy,
}

impl OrderController {
    /// Wire up a controller against its collaborators.
    ///
    /// Status assignments follow [`TransitionPolicy::Permissive`] by default,
    /// matching the platform's control surface.
    #[must_use]
    pub fn new(api: ApiClient, store: Store<Order>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            store,
            notifier,
            policy: TransitionPolicy::default(),
        }
    }

    /// Override the transition policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The store this controller feeds.
    #[must_use]
    pub fn store(&self) -> &Store<Order> {
        &self.store
    }

    /// Fetch the detailed order listing, replacing the store contents.
    ///
    /// On failure the store keeps its previous contents and one error
    /// notification is shown. This also backs the screen's manual refresh
    /// action.
    pub async fn load(&self) {
        match self.api.list_orders().await {
            Ok(page) => {
                tracing::debug!(total_orders = page.total_orders, "Fetched order listing");
                self.store.replace_all(page.orders).await;
            }
            Err(error) => {
                tracing::error!(%error, "Error fetching orders");
                self.notifier.error("Error", "Failed to fetch orders");
            }
        }
    }

    /// Assign a new status to an order.
    ///
    /// The request is sent first; only a confirmed update patches the local
    /// copy's status field (nothing else is touched), after which the full
    /// listing is re-fetched so aggregate statistics stay in sync. Under
    /// [`TransitionPolicy::Enforced`], illegal assignments are rejected
    /// before any request is sent.
    pub async fn set_status(&self, id: &OrderId, status: OrderStatus) {
        if self.policy == TransitionPolicy::Enforced {
            let Some(current) = self.store.get(id).await else {
                self.notifier.error("Error", "Order not found");
                return;
            };
            if !current.status.can_transition_to(status) {
                self.notifier.error(
                    "Error",
                    &format!("Cannot move order from {} to {}", current.status, status),
                );
                return;
            }
        }

        match self.api.update_order_status(id, status).await {
            Ok(()) => {
                self.store.patch(id, |order| order.status = status).await;
                self.notifier
                    .success("Success", "Order status updated successfully");
                // Resynchronize aggregate statistics.
                self.load().await;
            }
            Err(error) => {
                tracing::error!(%error, "Error updating order status");
                self.notifier
                    .error("Error", "Failed to update order status");
            }
        }
    }

    /// Fetch one order for the detail view.
    ///
    /// Reads past the store without touching it, as the detail modal does.
    pub async fn fetch_one(&self, id: &OrderId) -> Option<Order> {
        match self.api.get_order(id).await {
            Ok(order) => Some(order),
            Err(error) => {
                tracing::error!(%error, "Error fetching order details");
                self.notifier.error("Error", "Failed to fetch order details");
                None
            }
        }
    }

    /// The rows the screen renders: current snapshot, searched and sorted.
    pub async fn rows(&self, search: &str, sort: Option<(&str, SortDirection)>) -> Vec<Order> {
        let mut rows = filter_rows(self.store.snapshot().await, search, SEARCH_FIELDS);
        if let Some((key, direction)) = sort {
            sort_rows(&mut rows, key, direction);
        }
        rows
    }
}
