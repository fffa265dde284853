use order_desk::model::{Order, OrderId, OrderStatus, ProductCreate, ProductId};
use order_desk::runtime::OrderSystem;

/// Full end-to-end flow with both real actors: stock the catalog, build an
/// order from catalog data, run it through the queue, and check every
/// status along the way.
#[tokio::test]
async fn test_full_order_flow() {
    let system = OrderSystem::new();

    // Stock the catalog
    let params = ProductCreate {
        name: "Widget".to_string(),
        price: 100.0,
        stock: 10,
    };
    system
        .catalog_client
        .add_product(ProductId(1), params)
        .await
        .expect("Failed to add product");

    // Build an order from the catalog snapshot
    let product = system
        .catalog_client
        .get_product(ProductId(1))
        .await
        .expect("Failed to get product")
        .expect("Product not found");
    assert_eq!(product.name, "Widget");
    assert_eq!(product.price, 100.0);
    assert_eq!(product.stock, 10);

    let mut order = Order::new(OrderId(1), "Alice");
    order.add_item(product.name.clone(), product.price);
    assert_eq!(order.total_cost(), 100.0);

    // Reserve one unit
    let stock = system
        .catalog_client
        .update_stock(ProductId(1), -1)
        .await
        .expect("Failed to update stock");
    assert_eq!(stock, 9);

    // Enqueue and verify the initial status
    system
        .queue_client
        .add_order(order)
        .await
        .expect("Failed to add order");
    assert_eq!(
        system.queue_client.order_status(OrderId(1)).await.unwrap(),
        Some(OrderStatus::New)
    );

    // Process: FIFO head comes back and moves to Processing
    let processed = system
        .queue_client
        .process_next()
        .await
        .unwrap()
        .expect("Order should be pending");
    assert_eq!(processed.id(), &OrderId(1));
    assert_eq!(processed.customer_name(), "Alice");
    assert_eq!(processed.total_cost(), 100.0);
    assert_eq!(
        system.queue_client.order_status(OrderId(1)).await.unwrap(),
        Some(OrderStatus::Processing)
    );

    // Complete: archived on top, status Completed
    system
        .queue_client
        .complete_order(processed)
        .await
        .expect("Failed to complete order");
    assert_eq!(
        system.queue_client.order_status(OrderId(1)).await.unwrap(),
        Some(OrderStatus::Completed)
    );

    let history = system.queue_client.completed_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id(), &OrderId(1));

    // An id the queue never saw has no status
    assert_eq!(
        system.queue_client.order_status(OrderId(99)).await.unwrap(),
        None
    );

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Orders come back in exactly the order they were added, and the empty
/// queue keeps reporting "nothing pending" until a new order arrives.
#[tokio::test]
async fn test_queue_preserves_fifo_order() {
    let system = OrderSystem::new();

    for id in 1..=3u32 {
        system
            .queue_client
            .add_order(Order::new(OrderId(id), format!("Customer {id}")))
            .await
            .expect("Failed to add order");
    }

    for id in 1..=3u32 {
        let order = system
            .queue_client
            .process_next()
            .await
            .unwrap()
            .expect("Order should be pending");
        assert_eq!(order.id(), &OrderId(id));
    }

    assert!(system.queue_client.process_next().await.unwrap().is_none());
    assert!(system.queue_client.process_next().await.unwrap().is_none());

    system
        .queue_client
        .add_order(Order::new(OrderId(4), "Dora"))
        .await
        .unwrap();
    let order = system
        .queue_client
        .process_next()
        .await
        .unwrap()
        .expect("Order should be pending");
    assert_eq!(order.id(), &OrderId(4));

    system.shutdown().await.unwrap();
}

/// Concurrent submissions all land in the queue and can be drained to
/// completion - the actor serializes them without locks.
#[tokio::test]
async fn test_concurrent_order_submission() {
    let system = OrderSystem::new();

    let mut handles = vec![];
    for id in 1..=10u32 {
        let queue_client = system.queue_client.clone();
        handles.push(tokio::spawn(async move {
            queue_client
                .add_order(Order::new(OrderId(id), format!("Customer {id}")))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("add_order failed");
    }

    let mut drained = 0;
    while let Some(order) = system.queue_client.process_next().await.unwrap() {
        system
            .queue_client
            .complete_order(order)
            .await
            .expect("complete_order failed");
        drained += 1;
    }
    assert_eq!(drained, 10);
    assert_eq!(
        system.queue_client.completed_history().await.unwrap().len(),
        10
    );

    system.shutdown().await.unwrap();
}
