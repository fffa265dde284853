//! # Queue Client
//!
//! Provides a high-level API for interacting with the queue actor.
//! It wraps a `ServiceHandle<QueueRequest>` and exposes one async method
//! per queue operation.

use tracing::{debug, instrument};

use crate::framework::ServiceHandle;
use crate::model::{Order, OrderId, OrderStatus};
use crate::queue_actor::{QueueError, QueueRequest};

/// Client for interacting with the queue actor.
#[derive(Clone)]
pub struct QueueClient {
    handle: ServiceHandle<QueueRequest>,
}

impl QueueClient {
    pub fn new(handle: ServiceHandle<QueueRequest>) -> Self {
        Self { handle }
    }

    /// Enqueue `order` and register it with status
    /// [`OrderStatus::New`].
    ///
    /// Fails with [`QueueError::DuplicateOrder`] if the queue has ever seen
    /// the id before.
    #[instrument(skip(self, order))]
    pub async fn add_order(&self, order: Order) -> Result<(), QueueError> {
        debug!(id = %order.id(), "Sending request");
        self.handle
            .call(|respond_to| QueueRequest::AddOrder { order, respond_to })
            .await
            .map_err(|e| QueueError::ActorCommunicationError(e.to_string()))?
    }

    /// Dequeue the oldest pending order, moving it to
    /// [`OrderStatus::Processing`].
    ///
    /// Returns `Ok(None)` when nothing is pending - a normal condition, not
    /// an error - and keeps doing so until a new order is added.
    #[instrument(skip(self))]
    pub async fn process_next(&self) -> Result<Option<Order>, QueueError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| QueueRequest::ProcessNext { respond_to })
            .await
            .map_err(|e| QueueError::ActorCommunicationError(e.to_string()))
    }

    /// Record `order` as [`OrderStatus::Completed`] and push it onto the
    /// archive.
    ///
    /// Fails with [`QueueError::OrderNotFound`] if the id was never
    /// registered via [`add_order`](QueueClient::add_order).
    #[instrument(skip(self, order))]
    pub async fn complete_order(&self, order: Order) -> Result<(), QueueError> {
        debug!(id = %order.id(), "Sending request");
        self.handle
            .call(|respond_to| QueueRequest::CompleteOrder { order, respond_to })
            .await
            .map_err(|e| QueueError::ActorCommunicationError(e.to_string()))?
    }

    /// Look up the tracked status for `id`; `Ok(None)` means the id was
    /// never registered.
    #[instrument(skip(self))]
    pub async fn order_status(&self, id: OrderId) -> Result<Option<OrderStatus>, QueueError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| QueueRequest::GetStatus { id, respond_to })
            .await
            .map_err(|e| QueueError::ActorCommunicationError(e.to_string()))
    }

    /// Snapshot of the completed archive, most recently completed first.
    #[instrument(skip(self))]
    pub async fn completed_history(&self) -> Result<Vec<Order>, QueueError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| QueueRequest::CompletedHistory { respond_to })
            .await
            .map_err(|e| QueueError::ActorCommunicationError(e.to_string()))
    }
}
