//! # ServiceEntity Trait
//!
//! The `ServiceEntity` trait is the contract between a service's state
//! machine and the generic [`ServiceActor`](crate::framework::ServiceActor)
//! run loop. A service defines its own request enum and implements `handle`
//! to apply one request to its state; the framework owns the channel and
//! the sequencing.
//!
//! # Architecture Note
//! Why a trait over an opaque request type instead of a fixed operation set?
//! The services in this system are not uniform: the catalog is a keyed
//! store, while the order queue is a FIFO/LIFO machine with a status map.
//! Forcing both under one CRUD-shaped message enum would leave half the
//! variants meaningless. Each service instead declares exactly the requests
//! it answers, and the compiler guarantees a handle for one service cannot
//! carry another service's requests.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait a service state type implements to be driven by a
/// [`ServiceActor`](crate::framework::ServiceActor).
///
/// # Responders
/// Every request variant is expected to carry a
/// [`Responder`](crate::framework::Responder) for its reply. `handle` sends
/// the reply and ignores the send result: a dropped receiver only means the
/// caller gave up waiting, which must not take the actor down.
///
/// # Async
/// `handle` is async so a service may call other actors while processing a
/// request. The services in this crate are purely in-memory and never
/// suspend, but the seam is where dependencies would be awaited.
#[async_trait]
pub trait ServiceEntity: Send + 'static {
    /// The request enum this service answers.
    type Request: Send + Debug;

    /// Apply a single request to the state and send the reply.
    async fn handle(&mut self, request: Self::Request);
}
