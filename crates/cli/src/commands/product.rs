//! Product management commands.

use std::path::PathBuf;

use bodega_admin::controllers::ProductController;
use bodega_admin::models::{ImagePayload, ProductDraft};
use bodega_core::{CategoryId, ProductId};
use rust_decimal::Decimal;

use super::{CommandError, app_state, notifier, sort_spec};

fn controller() -> Result<ProductController, CommandError> {
    let state = app_state()?;
    Ok(ProductController::new(
        state.api().clone(),
        state.products().clone(),
        notifier(),
    ))
}

/// Assemble a create/update draft from command-line arguments.
///
/// Image files are read here and carried as base64 payloads.
#[allow(clippy::too_many_arguments)]
pub fn build_draft(
    name: &str,
    category: &str,
    description: &str,
    brand: &str,
    price: &str,
    stock: u32,
    images: &[PathBuf],
    featured: bool,
) -> Result<ProductDraft, CommandError> {
    let price = price
        .parse::<Decimal>()
        .map_err(|_| CommandError::InvalidPrice(price.to_owned()))?;

    let mut payloads = Vec::with_capacity(images.len());
    for path in images {
        let bytes = std::fs::read(path)?;
        payloads.push(ImagePayload::from_bytes(&bytes));
    }

    Ok(ProductDraft {
        name: name.to_owned(),
        category: Some(CategoryId::new(category)),
        description: description.to_owned(),
        brand: brand.to_owned(),
        price,
        stock,
        images: payloads,
        featured,
    })
}

/// List products, optionally searched, sorted, or grouped to one category.
pub async fn list(
    search: Option<&str>,
    sort: Option<&str>,
    desc: bool,
    category: Option<&str>,
) -> Result<(), CommandError> {
    let controller = controller()?;
    controller.load().await;

    let rows = match category {
        Some(category) => controller.by_category(&CategoryId::new(category)).await,
        None => {
            controller
                .rows(search.unwrap_or(""), sort_spec(sort, desc))
                .await
        }
    };

    if rows.is_empty() {
        tracing::info!("No products found");
        return Ok(());
    }

    for product in rows {
        tracing::info!(
            "{}  {}  [{}]  ${}  stock: {}{}",
            product.id,
            product.name,
            product.brand,
            product.price,
            product.stock,
            if product.featured { "  (featured)" } else { "" }
        );
    }
    Ok(())
}

/// Create a product.
pub async fn add(draft: ProductDraft) -> Result<(), CommandError> {
    let controller = controller()?;
    controller.create(draft).await;
    Ok(())
}

/// Update a product.
pub async fn update(id: &str, draft: ProductDraft) -> Result<(), CommandError> {
    let controller = controller()?;
    controller.load().await;
    controller.update(&ProductId::new(id), draft).await;
    Ok(())
}

/// Delete a product.
pub async fn remove(id: &str) -> Result<(), CommandError> {
    let controller = controller()?;
    controller.load().await;
    controller.delete(&ProductId::new(id)).await;
    Ok(())
}
