//! Product operations.
//!
//! Listing and creation are public endpoints on this platform; update and
//! delete require the bearer credential.

use bodega_core::ProductId;
use tracing::instrument;

use super::{ApiClient, ApiError, Auth};
use crate::models::{Product, ProductDraft};

const GET_ALL: &str = "/product/get-all";
const ADD: &str = "/product/add";

fn update_path(id: &ProductId) -> String {
    format!("/product/update/{id}")
}

fn delete_path(id: &ProductId) -> String {
    format!("/product/delete/{id}")
}

impl ApiClient {
    /// Fetch every product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get(GET_ALL, Auth::Public).await
    }

    /// Create a product (draft plus image payloads); returns the server's
    /// canonical copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn add_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        self.post(ADD, draft, Auth::Public).await
    }

    /// Update a product; returns the server's canonical copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self, draft), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        self.put(&update_path(id), draft, Auth::Bearer).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        self.delete(&delete_path(id), Auth::Bearer).await
    }
}
