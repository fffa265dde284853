//! State and request handler for the order queue.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::framework::ServiceEntity;
use crate::model::{Order, OrderId, OrderStatus};
use crate::queue_actor::error::QueueError;
use crate::queue_actor::messages::QueueRequest;

/// Sequences orders for processing, tracks per-id status, and archives
/// completed orders.
///
/// Invariants:
/// - `pending` preserves `AddOrder` call order (FIFO).
/// - `completed` is a stack; the most recently completed order is on top.
/// - every id ever accepted by `AddOrder` keeps a `statuses` entry from
///   then on, and its status only moves forward.
#[derive(Debug, Default)]
pub struct OrderQueue {
    pending: VecDeque<Order>,
    completed: Vec<Order>,
    statuses: HashMap<OrderId, OrderStatus>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceEntity for OrderQueue {
    type Request = QueueRequest;

    async fn handle(&mut self, request: QueueRequest) {
        match request {
            QueueRequest::AddOrder { order, respond_to } => {
                let id = order.id().clone();
                debug!(%id, customer = order.customer_name(), "AddOrder");
                let result = if self.statuses.contains_key(&id) {
                    warn!(%id, "Duplicate order id");
                    Err(QueueError::DuplicateOrder(id))
                } else {
                    self.statuses.insert(id.clone(), OrderStatus::New);
                    self.pending.push_back(order);
                    info!(%id, pending = self.pending.len(), "Order enqueued");
                    Ok(())
                };
                let _ = respond_to.send(result);
            }
            QueueRequest::ProcessNext { respond_to } => {
                let order = self.pending.pop_front();
                match &order {
                    Some(order) => {
                        self.statuses
                            .insert(order.id().clone(), OrderStatus::Processing);
                        info!(id = %order.id(), pending = self.pending.len(), "Order dequeued");
                    }
                    None => debug!("ProcessNext on empty queue"),
                }
                let _ = respond_to.send(order);
            }
            QueueRequest::CompleteOrder { order, respond_to } => {
                let id = order.id().clone();
                debug!(%id, "CompleteOrder");
                let result = if self.statuses.contains_key(&id) {
                    // Not gated on a prior dequeue; the caller owns that
                    // sequencing.
                    self.statuses.insert(id.clone(), OrderStatus::Completed);
                    self.completed.push(order);
                    info!(%id, completed = self.completed.len(), "Order completed");
                    Ok(())
                } else {
                    warn!(%id, "Not found");
                    Err(QueueError::OrderNotFound(id))
                };
                let _ = respond_to.send(result);
            }
            QueueRequest::GetStatus { id, respond_to } => {
                let status = self.statuses.get(&id).copied();
                debug!(%id, found = status.is_some(), "GetStatus");
                let _ = respond_to.send(status);
            }
            QueueRequest::CompletedHistory { respond_to } => {
                let history: Vec<Order> = self.completed.iter().rev().cloned().collect();
                debug!(len = history.len(), "CompletedHistory");
                let _ = respond_to.send(history);
            }
        }
    }
}
