//! Demo driver: seeds the catalog, builds an order from catalog data, and
//! runs it through the queue, reporting statuses along the way.

use order_desk::model::{Order, OrderId, ProductCreate, ProductId};
use order_desk::runtime::{setup_tracing, OrderSystem};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order processing demo");

    let system = OrderSystem::new();

    // Stock the catalog
    system
        .catalog_client
        .add_product(
            ProductId(1),
            ProductCreate {
                name: "Widget".to_string(),
                price: 100.0,
                stock: 10,
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    system
        .catalog_client
        .add_product(
            ProductId(2),
            ProductCreate {
                name: "Gadget".to_string(),
                price: 200.0,
                stock: 5,
            },
        )
        .await
        .map_err(|e| e.to_string())?;

    // Build an order from catalog data
    let mut order = Order::new(OrderId(1), "Alice");
    if let Some(product) = system
        .catalog_client
        .get_product(ProductId(1))
        .await
        .map_err(|e| e.to_string())?
    {
        order.add_item(product.name.clone(), product.price);
        let stock = system
            .catalog_client
            .update_stock(ProductId(1), -1)
            .await
            .map_err(|e| e.to_string())?;
        info!(product = %product.name, stock, "Reserved one unit");
    }

    let order_id = order.id().clone();
    system
        .queue_client
        .add_order(order)
        .await
        .map_err(|e| e.to_string())?;

    // Drain the queue
    let span = tracing::info_span!("order_processing");
    async {
        if let Some(processed) = system
            .queue_client
            .process_next()
            .await
            .map_err(|e| e.to_string())?
        {
            info!(
                id = %processed.id(),
                customer = processed.customer_name(),
                total = processed.total_cost(),
                "Processing order"
            );
            system
                .queue_client
                .complete_order(processed)
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    match system.queue_client.order_status(order_id.clone()).await {
        Ok(Some(status)) => info!(id = %order_id, %status, "Final order status"),
        Ok(None) => error!(id = %order_id, "Order was never registered"),
        Err(e) => error!(error = %e, "Status lookup failed"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
