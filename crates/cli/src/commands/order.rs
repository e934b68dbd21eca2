//! Order management commands.

use bodega_admin::controllers::OrderController;
use bodega_core::{OrderId, OrderStatus, TransitionPolicy};

use super::{CommandError, app_state, notifier, sort_spec};

fn controller(policy: TransitionPolicy) -> Result<OrderController, CommandError> {
    let state = app_state()?;
    Ok(OrderController::new(
        state.api().clone(),
        state.orders().clone(),
        notifier(),
    )
    .with_policy(policy))
}

/// List orders, optionally searched and sorted.
pub async fn list(
    search: Option<&str>,
    sort: Option<&str>,
    desc: bool,
) -> Result<(), CommandError> {
    let controller = controller(TransitionPolicy::default())?;
    controller.load().await;

    let rows = controller
        .rows(search.unwrap_or(""), sort_spec(sort, desc))
        .await;

    if rows.is_empty() {
        tracing::info!("No orders found");
        return Ok(());
    }

    for order in rows {
        tracing::info!(
            "{}  {}  {}  ${}  {}{}",
            order.id,
            order.customer.name,
            order.created_at.format("%Y-%m-%d"),
            order.total,
            order.status,
            if order.cancelled { "  (cancelled)" } else { "" }
        );
    }
    Ok(())
}

/// Show one order in detail.
pub async fn show(id: &str) -> Result<(), CommandError> {
    let controller = controller(TransitionPolicy::default())?;

    let Some(order) = controller.fetch_one(&OrderId::new(id)).await else {
        return Ok(());
    };

    tracing::info!("Order ID: {}", order.id);
    tracing::info!("Customer: {}", order.customer.name);
    tracing::info!("Contact: {}", order.customer.contact);
    tracing::info!("Address: {}", order.customer.address);
    tracing::info!("Date: {}", order.created_at.format("%Y-%m-%d"));
    tracing::info!("Status: {}", order.status);
    tracing::info!("Total: ${}", order.total);
    tracing::info!("Items:");
    for item in &order.items {
        tracing::info!(
            "  {} - Quantity: {}, Price: ${}",
            item.name,
            item.quantity,
            item.price
        );
    }
    Ok(())
}

/// Assign a new status to an order.
pub async fn set_status(id: &str, status: &str, enforce: bool) -> Result<(), CommandError> {
    let status: OrderStatus = status.parse().map_err(CommandError::InvalidStatus)?;

    let policy = if enforce {
        TransitionPolicy::Enforced
    } else {
        TransitionPolicy::Permissive
    };

    let controller = controller(policy)?;
    // Enforcement compares against the order's current status, so the
    // listing has to be in the store first.
    controller.load().await;
    controller.set_status(&OrderId::new(id), status).await;
    Ok(())
}

/// Print the status lifecycle the selector presents.
pub fn statuses() {
    for status in OrderStatus::ALL {
        let note = if status.is_absorbing() {
            "  (absorbing)"
        } else if status.is_terminal() {
            "  (terminal)"
        } else {
            ""
        };
        tracing::info!("{status}{note}");
    }
}
