//! Error types for the queue actor.

use thiserror::Error;

use crate::model::OrderId;

/// Errors that can occur during order queue operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueueError {
    /// The order id was never registered via `add_order`.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// An order with this id is already tracked by the queue.
    #[error("Duplicate order id: {0}")]
    DuplicateOrder(OrderId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
