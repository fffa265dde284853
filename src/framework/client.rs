//! # Generic Client
//!
//! This module defines the sender half of a service: a cheap-to-clone
//! handle that pairs each request with a oneshot reply channel.

use tokio::sync::{mpsc, oneshot};

use crate::framework::error::ActorError;
use crate::framework::message::Responder;

/// A type-safe handle for sending requests to a
/// [`ServiceActor`](crate::framework::ServiceActor).
///
/// * **Cloneable** - holds only a sender; clones share the same actor.
/// * **Request/response** - [`call`](ServiceHandle::call) builds the request
///   around a fresh [`Responder`] and awaits the reply.
/// * **Generic** - works with any request enum; the domain clients in
///   [`clients`](crate::clients) wrap it with named methods.
pub struct ServiceHandle<R> {
    sender: mpsc::Sender<R>,
}

// Manual impl: the request enums carry oneshot senders and are themselves
// never Clone, so a derive bound on R would be wrong.
impl<R> Clone for ServiceHandle<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R> ServiceHandle<R> {
    pub fn new(sender: mpsc::Sender<R>) -> Self {
        Self { sender }
    }

    /// Sends one request and awaits its reply.
    ///
    /// `request` receives the [`Responder`] to embed and returns the
    /// finished request value:
    ///
    /// ```rust,ignore
    /// let product = handle
    ///     .call(|respond_to| CatalogRequest::GetProduct { id, respond_to })
    ///     .await?;
    /// ```
    pub async fn call<T>(
        &self,
        request: impl FnOnce(Responder<T>) -> R,
    ) -> Result<T, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)
    }
}
