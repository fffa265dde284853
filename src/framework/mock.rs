//! # Mock Handles & Testing Guide
//!
//! [`mock_handle`] returns a [`ServiceHandle`] plus the raw receiving end of
//! its channel, letting a test stand in for the actor: receive each request,
//! assert on its fields, and script the reply through the embedded
//! responder. No task is spawned and nothing is nondeterministic.
//!
//! ## When to use mocks vs real actors
//!
//! | Feature | `mock_handle` | Real actor |
//! |---------|---------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (involves tokio spawn) |
//! | **Determinism** | 100% deterministic | Subject to scheduler |
//! | **State** | None (scripted replies) | Real state management |
//! | **Use case** | Unit testing client logic | Testing the actor itself |
//! | **Error injection** | Easy (send any reply, or drop the receiver) | Hard |
//!
//! ## Example
//!
//! ```rust,ignore
//! let (handle, mut receiver) = mock_handle(10);
//! let client = CatalogClient::new(handle);
//!
//! let call = tokio::spawn(async move { client.get_product(ProductId(1)).await });
//!
//! match receiver.recv().await.expect("expected a request") {
//!     CatalogRequest::GetProduct { id, respond_to } => {
//!         assert_eq!(id, ProductId(1));
//!         respond_to.send(None).unwrap();
//!     }
//!     other => panic!("unexpected request: {other:?}"),
//! }
//!
//! assert!(call.await.unwrap().unwrap().is_none());
//! ```
//!
//! Dropping the receiver without replying makes the next client call fail
//! with [`ActorError::ActorClosed`](crate::framework::ActorError), which is
//! how the clients' communication-error paths are tested.

use tokio::sync::mpsc;

use crate::framework::client::ServiceHandle;

/// Creates a [`ServiceHandle`] whose requests arrive at the returned
/// receiver instead of an actor.
pub fn mock_handle<R>(buffer_size: usize) -> (ServiceHandle<R>, mpsc::Receiver<R>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ServiceHandle::new(sender), receiver)
}
