//! Dashboard counts command.

use bodega_admin::controllers::{CategoryController, OrderController, ProductController};

use super::{CommandError, app_state, notifier};

/// Load all three collections and show the aggregate counts.
pub async fn show() -> Result<(), CommandError> {
    let state = app_state()?;
    let notifier = notifier();

    let categories = CategoryController::new(
        state.api().clone(),
        state.categories().clone(),
        notifier.clone(),
    );
    let products = ProductController::new(
        state.api().clone(),
        state.products().clone(),
        notifier.clone(),
    );
    let orders = OrderController::new(state.api().clone(), state.orders().clone(), notifier);

    categories.load().await;
    products.load().await;
    orders.load().await;

    let counts = state.counts().await;
    tracing::info!("Total Products: {}", counts.products);
    tracing::info!("Total Categories: {}", counts.categories);
    tracing::info!("Total Orders: {}", counts.orders);
    Ok(())
}
