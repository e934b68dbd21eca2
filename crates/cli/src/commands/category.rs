//! Category management commands.

use bodega_admin::controllers::CategoryController;
use bodega_admin::models::CategoryDraft;
use bodega_core::CategoryId;

use super::{CommandError, app_state, notifier, sort_spec};

fn controller() -> Result<CategoryController, CommandError> {
    let state = app_state()?;
    Ok(CategoryController::new(
        state.api().clone(),
        state.categories().clone(),
        notifier(),
    ))
}

/// List categories, optionally searched and sorted.
pub async fn list(
    search: Option<&str>,
    sort: Option<&str>,
    desc: bool,
) -> Result<(), CommandError> {
    let controller = controller()?;
    controller.load().await;

    let rows = controller
        .rows(search.unwrap_or(""), sort_spec(sort, desc))
        .await;

    if rows.is_empty() {
        tracing::info!("No categories added yet");
        return Ok(());
    }

    for category in rows {
        match &category.image {
            Some(image) => tracing::info!("{}  {}  {}", category.id, category.name, image),
            None => tracing::info!("{}  {}", category.id, category.name),
        }
    }
    Ok(())
}

/// Create a category.
pub async fn add(name: &str, image: Option<String>) -> Result<(), CommandError> {
    let controller = controller()?;

    let mut draft = CategoryDraft::new(name);
    if let Some(image) = image {
        draft = draft.with_image(image);
    }
    controller.create(draft).await;
    Ok(())
}

/// Update a category.
pub async fn update(id: &str, name: &str, image: Option<String>) -> Result<(), CommandError> {
    let controller = controller()?;
    controller.load().await;

    let mut draft = CategoryDraft::new(name);
    if let Some(image) = image {
        draft = draft.with_image(image);
    }
    controller.update(&CategoryId::new(id), draft).await;
    Ok(())
}

/// Delete a category.
pub async fn remove(id: &str) -> Result<(), CommandError> {
    let controller = controller()?;
    controller.load().await;
    controller.delete(&CategoryId::new(id)).await;
    Ok(())
}
