//! # Queue Actor
//!
//! The order queue as an actor: sequences orders for processing, tracks a
//! per-order status, and archives completed orders.
//!
//! ## Structure
//!
//! - [`entity`] - [`OrderQueue`] state and its request handler
//! - [`messages`] - [`QueueRequest`] accepted by the actor
//! - [`error`] - [`QueueError`] type for type-safe error handling
//! - [`new()`] - factory that creates the actor and its client
//!
//! ## State machine
//!
//! Per order id, over `{New, Processing, Completed}`:
//!
//! - `AddOrder` registers the id as `New` and enqueues FIFO. A second order
//!   with an id the queue has ever seen is rejected - one id, one order,
//!   one status, for the order's whole lifetime.
//! - `ProcessNext` dequeues the oldest pending order and moves it to
//!   `Processing`; an empty queue replies with `None`, a normal condition.
//! - `CompleteOrder` moves a registered order to `Completed` and pushes it
//!   onto the archive (most recent on top). It does not require a prior
//!   dequeue - completing straight from `New` is the caller's business -
//!   but an id that was never added is rejected.
//!
//! Statuses never move backwards.

pub mod entity;
pub mod error;
pub mod messages;

pub use entity::*;
pub use error::*;
pub use messages::*;

use crate::clients::QueueClient;
use crate::framework::ServiceActor;

/// Creates a new queue actor and its client.
pub fn new() -> (ServiceActor<OrderQueue>, QueueClient) {
    let (actor, handle) = ServiceActor::new(32, OrderQueue::new());
    let client = QueueClient::new(handle);

    (actor, client)
}
