//! Category operations.

use bodega_core::CategoryId;
use tracing::instrument;

use super::{ApiClient, ApiError, Auth};
use crate::models::{Category, CategoryDraft};

const GET_ALL: &str = "/admin/category/get-all-categories";
const ADD: &str = "/admin/category/add-category";

fn update_path(id: &CategoryId) -> String {
    format!("/admin/category/update-category/{id}")
}

fn remove_path(id: &CategoryId) -> String {
    format!("/admin/category/remove-category/{id}")
}

impl ApiClient {
    /// Fetch every category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get(GET_ALL, Auth::Bearer).await
    }

    /// Create a category; returns the server's canonical copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self), fields(name = %draft.name))]
    pub async fn add_category(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        self.post(ADD, draft, Auth::Bearer).await
    }

    /// Update a category; returns the server's canonical copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn update_category(
        &self,
        id: &CategoryId,
        draft: &CategoryDraft,
    ) -> Result<Category, ApiError> {
        self.put(&update_path(id), draft, Auth::Bearer).await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error response.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn remove_category(&self, id: &CategoryId) -> Result<(), ApiError> {
        self.delete(&remove_path(id), Auth::Bearer).await
    }
}
