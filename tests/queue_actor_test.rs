use order_desk::clients::QueueClient;
use order_desk::model::{Order, OrderId, OrderStatus};
use order_desk::queue_actor::{self, QueueError};

/// Single-actor tests: a real queue actor, no catalog involved.
fn start_queue() -> QueueClient {
    let (actor, client) = queue_actor::new();
    tokio::spawn(actor.run());
    client
}

#[tokio::test]
async fn test_status_follows_the_order_lifecycle() {
    let queue = start_queue();

    queue
        .add_order(Order::new(OrderId(1), "Alice"))
        .await
        .unwrap();
    assert_eq!(
        queue.order_status(OrderId(1)).await.unwrap(),
        Some(OrderStatus::New)
    );

    let order = queue
        .process_next()
        .await
        .unwrap()
        .expect("Order should be pending");
    assert_eq!(
        queue.order_status(OrderId(1)).await.unwrap(),
        Some(OrderStatus::Processing)
    );

    queue.complete_order(order).await.unwrap();
    assert_eq!(
        queue.order_status(OrderId(1)).await.unwrap(),
        Some(OrderStatus::Completed)
    );

    assert_eq!(queue.order_status(OrderId(2)).await.unwrap(), None);
}

#[tokio::test]
async fn test_duplicate_order_id_is_rejected() {
    let queue = start_queue();

    queue
        .add_order(Order::new(OrderId(1), "Alice"))
        .await
        .unwrap();

    let result = queue.add_order(Order::new(OrderId(1), "Mallory")).await;
    assert_eq!(result, Err(QueueError::DuplicateOrder(OrderId(1))));

    // Only the first order made it into the queue
    let order = queue
        .process_next()
        .await
        .unwrap()
        .expect("Order should be pending");
    assert_eq!(order.customer_name(), "Alice");
    assert!(queue.process_next().await.unwrap().is_none());
}

#[tokio::test]
async fn test_completed_id_stays_registered() {
    let queue = start_queue();

    queue
        .add_order(Order::new(OrderId(1), "Alice"))
        .await
        .unwrap();
    let order = queue.process_next().await.unwrap().unwrap();
    queue.complete_order(order).await.unwrap();

    // The id keeps its status slot for life; re-adding is still a duplicate.
    let result = queue.add_order(Order::new(OrderId(1), "Alice")).await;
    assert_eq!(result, Err(QueueError::DuplicateOrder(OrderId(1))));
    assert_eq!(
        queue.order_status(OrderId(1)).await.unwrap(),
        Some(OrderStatus::Completed)
    );
}

#[tokio::test]
async fn test_complete_unknown_order_is_rejected() {
    let queue = start_queue();

    let result = queue.complete_order(Order::new(OrderId(7), "Nobody")).await;
    assert_eq!(result, Err(QueueError::OrderNotFound(OrderId(7))));

    assert!(queue.completed_history().await.unwrap().is_empty());
    assert_eq!(queue.order_status(OrderId(7)).await.unwrap(), None);
}

#[tokio::test]
async fn test_complete_without_dequeue_is_allowed() {
    let queue = start_queue();

    let order = Order::new(OrderId(1), "Alice");
    queue.add_order(order.clone()).await.unwrap();

    // Jumping New -> Completed is the caller's call; the queue records it.
    queue.complete_order(order).await.unwrap();
    assert_eq!(
        queue.order_status(OrderId(1)).await.unwrap(),
        Some(OrderStatus::Completed)
    );
}

#[tokio::test]
async fn test_completed_archive_is_most_recent_first() {
    let queue = start_queue();

    for id in 1..=2u32 {
        queue
            .add_order(Order::new(OrderId(id), format!("Customer {id}")))
            .await
            .unwrap();
    }
    let first = queue.process_next().await.unwrap().unwrap();
    let second = queue.process_next().await.unwrap().unwrap();

    queue.complete_order(first).await.unwrap();
    queue.complete_order(second).await.unwrap();

    let history = queue.completed_history().await.unwrap();
    let ids: Vec<&OrderId> = history.iter().map(|order| order.id()).collect();
    assert_eq!(ids, [&OrderId(2), &OrderId(1)]);
}
