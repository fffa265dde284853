//! # Generic Actor Server
//!
//! This module defines the `ServiceActor`, the server half of a service. It
//! owns the state and the receiver end of the channel, and processes
//! requests strictly one at a time.
//!
//! **Concurrency Model**:
//! Each `ServiceActor` runs in its own Tokio task and processes its inbox
//! sequentially, so the state needs no `Mutex` or `RwLock` - exclusive
//! ownership within the task is the whole synchronization story. Multiple
//! actors still run in parallel with each other.

use tokio::sync::mpsc;
use tracing::info;

use crate::framework::client::ServiceHandle;
use crate::framework::entity::ServiceEntity;

/// The generic actor that drives a [`ServiceEntity`].
///
/// # Usage Pattern
///
/// 1. **Create**: `ServiceActor::new(buffer, state)` returns the actor and
///    its [`ServiceHandle`].
/// 2. **Run**: spawn `actor.run()` in a background task.
/// 3. **Use**: clone the handle freely and send requests through it.
///
/// The loop exits when every handle has been dropped.
pub struct ServiceActor<S: ServiceEntity> {
    receiver: mpsc::Receiver<S::Request>,
    state: S,
}

impl<S: ServiceEntity> ServiceActor<S> {
    /// Creates a new `ServiceActor` around `state` and its associated handle.
    ///
    /// `buffer_size` is the capacity of the request channel; senders wait
    /// when it is full.
    pub fn new(buffer_size: usize, state: S) -> (Self, ServiceHandle<S::Request>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        (actor, ServiceHandle::new(sender))
    }

    /// Runs the actor's event loop, processing requests until the channel
    /// closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g. "OrderQueue" instead of
        // "order_desk::queue_actor::entity::OrderQueue")
        let service = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(service, "Actor started");

        while let Some(request) = self.receiver.recv().await {
            self.state.handle(request).await;
        }

        info!(service, "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::error::ActorError;
    use crate::framework::message::Responder;
    use async_trait::async_trait;

    // --- Minimal service for exercising the loop ---

    #[derive(Debug)]
    enum CounterRequest {
        Add {
            amount: i64,
            respond_to: Responder<i64>,
        },
        Total {
            respond_to: Responder<i64>,
        },
    }

    struct Counter {
        total: i64,
    }

    #[async_trait]
    impl ServiceEntity for Counter {
        type Request = CounterRequest;

        async fn handle(&mut self, request: CounterRequest) {
            match request {
                CounterRequest::Add { amount, respond_to } => {
                    self.total += amount;
                    let _ = respond_to.send(self.total);
                }
                CounterRequest::Total { respond_to } => {
                    let _ = respond_to.send(self.total);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_requests_are_applied_in_order() {
        let (actor, handle) = ServiceActor::new(10, Counter { total: 0 });
        tokio::spawn(actor.run());

        let after_add = handle
            .call(|respond_to| CounterRequest::Add {
                amount: 5,
                respond_to,
            })
            .await
            .unwrap();
        assert_eq!(after_add, 5);

        let after_second = handle
            .call(|respond_to| CounterRequest::Add {
                amount: -2,
                respond_to,
            })
            .await
            .unwrap();
        assert_eq!(after_second, 3);

        let total = handle
            .call(|respond_to| CounterRequest::Total { respond_to })
            .await
            .unwrap();
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_call_after_actor_dropped_reports_closed() {
        let (actor, handle) = ServiceActor::new(1, Counter { total: 0 });
        drop(actor);

        let result = handle
            .call(|respond_to| CounterRequest::Total { respond_to })
            .await;
        assert_eq!(result.unwrap_err(), ActorError::ActorClosed);
    }
}
