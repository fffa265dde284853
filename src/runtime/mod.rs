//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`OrderSystem`] - spawns the catalog and queue actors, hands out their
//!   clients, and coordinates graceful shutdown
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use tracing::*;
