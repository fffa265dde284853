//! # Framework Errors
//!
//! Channel-level failures shared by all services. Domain-level conditions
//! (unknown product, duplicate order id, ...) belong to the services' own
//! error enums; the framework only knows whether the conversation with an
//! actor broke down.

/// Errors that can occur while communicating with an actor.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ActorError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
