//! Requests accepted by the queue actor.

use crate::framework::Responder;
use crate::model::{Order, OrderId, OrderStatus};
use crate::queue_actor::error::QueueError;

/// Requests handled by [`OrderQueue`](crate::queue_actor::OrderQueue).
#[derive(Debug)]
pub enum QueueRequest {
    /// Enqueue an order at the tail and register it with status `New`.
    AddOrder {
        order: Order,
        respond_to: Responder<Result<(), QueueError>>,
    },
    /// Dequeue the oldest pending order, moving it to `Processing`.
    /// Replies `None` when nothing is pending.
    ProcessNext {
        respond_to: Responder<Option<Order>>,
    },
    /// Record a registered order as `Completed` and archive it.
    CompleteOrder {
        order: Order,
        respond_to: Responder<Result<(), QueueError>>,
    },
    /// Look up the tracked status for an id; `None` means never registered.
    GetStatus {
        id: OrderId,
        respond_to: Responder<Option<OrderStatus>>,
    },
    /// Snapshot of the completed archive, most recent first.
    CompletedHistory {
        respond_to: Responder<Vec<Order>>,
    },
}
