//! Generic actor plumbing shared by every service in the crate.
//!
//! The framework is deliberately small: a service defines a request enum
//! (each variant carrying its own [`Responder`]), implements
//! [`ServiceEntity`] to apply one request to its state, and gets a
//! sequential run loop plus a cloneable, type-safe handle for free.
//!
//! # Main Components
//!
//! - [`ServiceEntity`] - trait a service state type implements to be driven
//!   by the actor loop
//! - [`ServiceActor`] - owns the state and the receiving end of the channel
//! - [`ServiceHandle`] - cloneable sender; pairs each request with a oneshot
//!   responder
//! - [`ActorError`] - channel-level failures
//!
//! # Testing
//!
//! See [`mock`] for testing clients without spawning actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ServiceActor;
pub use client::ServiceHandle;
pub use entity::ServiceEntity;
pub use error::ActorError;
pub use message::Responder;
