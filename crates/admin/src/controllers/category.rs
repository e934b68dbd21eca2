//! Category management.

use std::sync::Arc;

use bodega_core::CategoryId;

use super::ValidationError;
use crate::api::ApiClient;
use crate::models::{Category, CategoryDraft};
use crate::notify::Notifier;
use crate::store::Store;
use crate::table::{SortDirection, filter_rows, sort_rows};

/// Columns the category screen searches.
const SEARCH_FIELDS: &[&str] = &["name"];

/// View-controller for the category screen.
pub struct CategoryController {
    api: ApiClient,
    store: Store<Category>,
    notifier: Arc<dyn Notifier>,
}

impl CategoryController {
    /// Wire up a controller against its collaborators.
    #[must_use]
    pub fn new(api: ApiClient, store: Store<Category>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            store,
            notifier,
        }
    }

    /// The store this controller feeds.
    #[must_use]
    pub fn store(&self) -> &Store<Category> {
        &self.store
    }

    /// Fetch all categories, replacing the store contents.
    ///
    /// On failure the store keeps its previous contents and one error
    /// notification is shown.
    pub async fn load(&self) {
        match self.api.list_categories().await {
            Ok(categories) => self.store.replace_all(categories).await,
            Err(error) => {
                tracing::error!(%error, "Error fetching categories");
                self.notifier.error("Error", "Failed to fetch categories");
            }
        }
    }

    /// Create a category from a draft.
    pub async fn create(&self, draft: CategoryDraft) {
        if let Err(error) = validate(&draft) {
            self.notifier.error("Validation", &error.to_string());
            return;
        }

        match self.api.add_category(&draft).await {
            Ok(created) => {
                self.store.append(created).await;
                self.notifier
                    .success("Success", "Category added successfully");
            }
            Err(error) => {
                tracing::error!(%error, "Error adding category");
                self.notifier.error("Error", "Failed to add category");
            }
        }
    }

    /// Update a category; the store takes the server's canonical copy.
    pub async fn update(&self, id: &CategoryId, draft: CategoryDraft) {
        if let Err(error) = validate(&draft) {
            self.notifier.error("Validation", &error.to_string());
            return;
        }

        match self.api.update_category(id, &draft).await {
            Ok(updated) => {
                self.store.replace_one(id, updated).await;
                self.notifier
                    .success("Success", "Category updated successfully");
            }
            Err(error) => {
                tracing::error!(%error, "Error updating category");
                self.notifier.error("Error", "Failed to update category");
            }
        }
    }

    /// Delete a category; removed from the store only after confirmation.
    pub async fn delete(&self, id: &CategoryId) {
        match self.api.remove_category(id).await {
            Ok(()) => {
                self.store.remove(id).await;
                self.notifier
                    .success("Success", "Category deleted successfully");
            }
            Err(error) => {
                tracing::error!(%error, "Error deleting category");
                self.notifier.error("Error", "Failed to delete category");
            }
        }
    }

    /// The rows the screen renders: current snapshot, searched and sorted.
    pub async fn rows(
        &self,
        search: &str,
        sort: Option<(&str, SortDirection)>,
    ) -> Vec<Category> {
        let mut rows = filter_rows(self.store.snapshot().await, search, SEARCH_FIELDS);
        if let Some((key, direction)) = sort {
            sort_rows(&mut rows, key, direction);
        }
        rows
    }
}

fn validate(draft: &CategoryDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::Missing("category name"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_name() {
        assert_eq!(
            validate(&CategoryDraft::new("  ")),
            Err(ValidationError::Missing("category name"))
        );
        assert_eq!(validate(&CategoryDraft::new("Beverages")), Ok(()));
    }
}
