//! Order operations.

use bodega_core::{OrderId, OrderStatus};
use serde::Serialize;
use tracing::instrument;

use super::{ApiClient, ApiError, Auth};
use crate::models::{Order, OrdersPage};

const GET_ALL_DETAILS: &str = "/admin/order/get-all-details";

fn get_one_path(id: &OrderId) -> String {
    format!("/admin/order/get-one/{id}")
}

fn update_status_path(id: &OrderId) -> String {
    format!("/admin/order/update-status/{id}")
}

/// Body of a status update request.
#[derive(Debug, Clone, Copy, Serialize)]
struct StatusUpdateRequest {
    status: OrderStatus,
}

impl ApiClient {
    /// Fetch the detailed order listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<OrdersPage, ApiError> {
        self.get(GET_ALL_DETAILS, Auth::Bearer).await
    }

    /// Fetch one order for the detail view.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.get(&get_one_path(id), Auth::Bearer).await
    }

    /// Assign a new status to an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self), fields(order_id = %id, status = %status))]
    pub async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        self.put_unit(&update_status_path(id), &StatusUpdateRequest { status }, Auth::Bearer)
            .await
    }
}
