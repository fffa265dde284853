//! Typed wrappers around [`ServiceHandle`](crate::framework::ServiceHandle).

pub mod catalog_client;
pub mod queue_client;

pub use catalog_client::*;
pub use queue_client::*;
