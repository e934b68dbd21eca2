//! Product management.

use std::sync::Arc;

use bodega_core::{CategoryId, ProductId};

use super::ValidationError;
use crate::api::{ApiClient, ApiError};
use crate::models::{Product, ProductDraft};
use crate::notify::Notifier;
use crate::store::Store;
use crate::table::{SortDirection, filter_rows, sort_rows};

/// Columns the product screen searches.
const SEARCH_FIELDS: &[&str] = &["name", "brand", "description"];

/// View-controller for the product screen.
pub struct ProductController {
    api: ApiClient,
    store: Store<Product>,
    notifier: Arc<dyn Notifier>,
}

impl ProductController {
    /// Wire up a controller against its collaborators.
    #[must_use]
    pub fn new(api: ApiClient, store: Store<Product>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            store,
            notifier,
        }
    }

    /// The store this controller feeds.
    #[must_use]
    pub fn store(&self) -> &Store<Product> {
        &self.store
    }

    /// Fetch all products, replacing the store contents.
    ///
    /// On failure the store keeps its previous contents and one error
    /// notification is shown.
    pub async fn load(&self) {
        match self.api.list_products().await {
            Ok(products) => self.store.replace_all(products).await,
            Err(error) => {
                tracing::error!(%error, "Error fetching products");
                self.notifier.error("Error", "Failed to fetch products");
            }
        }
    }

    /// Create a product from a draft (including image payloads).
    pub async fn create(&self, draft: ProductDraft) {
        if let Err(error) = validate(&draft) {
            self.notifier.error("Validation", &error.to_string());
            return;
        }

        match self.api.add_product(&draft).await {
            Ok(created) => {
                self.store.append(created).await;
                self.notifier
                    .success("Success", "Product added successfully");
            }
            Err(ApiError::NotFound(_)) => {
                self.notifier.error("Error", "Category not found");
            }
            Err(error) => {
                tracing::error!(%error, "Error adding product");
                self.notifier.error("Error", "Failed to add product");
            }
        }
    }

    /// Update a product; the store takes the server's canonical copy.
    pub async fn update(&self, id: &ProductId, draft: ProductDraft) {
        if let Err(error) = validate(&draft) {
            self.notifier.error("Validation", &error.to_string());
            return;
        }

        match self.api.update_product(id, &draft).await {
            Ok(updated) => {
                self.store.replace_one(id, updated).await;
                self.notifier
                    .success("Success", "Product updated successfully");
            }
            Err(error) => {
                tracing::error!(%error, "Error updating product");
                self.notifier.error("Error", "Failed to update product");
            }
        }
    }

    /// Delete a product; removed from the store only after confirmation.
    pub async fn delete(&self, id: &ProductId) {
        match self.api.delete_product(id).await {
            Ok(()) => {
                self.store.remove(id).await;
                self.notifier
                    .success("Success", "Product deleted successfully");
            }
            Err(ApiError::NotFound(_)) => {
                self.notifier.error("Error", "Product not found");
            }
            Err(ApiError::Unauthorized(_)) => {
                self.notifier
                    .error("Error", "Unauthorized. Please log in again.");
            }
            Err(error) => {
                tracing::error!(%error, "Error deleting product");
                self.notifier.error("Error", "Failed to delete product");
            }
        }
    }

    /// The rows the screen renders: current snapshot, searched and sorted.
    pub async fn rows(&self, search: &str, sort: Option<(&str, SortDirection)>) -> Vec<Product> {
        let mut rows = filter_rows(self.store.snapshot().await, search, SEARCH_FIELDS);
        if let Some((key, direction)) = sort {
            sort_rows(&mut rows, key, direction);
        }
        rows
    }

    /// Products belonging to one category, for the grouped catalog view.
    pub async fn by_category(&self, category: &CategoryId) -> Vec<Product> {
        self.store
            .snapshot()
            .await
            .into_iter()
            .filter(|product| product.category == *category)
            .collect()
    }
}

fn validate(draft: &ProductDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::Missing("product name"));
    }
    match &draft.category {
        Some(category) if !category.as_str().trim().is_empty() => Ok(()),
        _ => Err(ValidationError::Missing("category")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_name_and_category() {
        let mut draft = ProductDraft {
            name: "Oat Milk".to_string(),
            category: Some(CategoryId::new("cat-1")),
            ..ProductDraft::default()
        };
        assert_eq!(validate(&draft), Ok(()));

        draft.category = None;
        assert_eq!(validate(&draft), Err(ValidationError::Missing("category")));

        draft.category = Some(CategoryId::new("cat-1"));
        draft.name = " ".to_string();
        assert_eq!(
            validate(&draft),
            Err(ValidationError::Missing("product name"))
        );
    }
}
