//! # Catalog Actor
//!
//! The product catalog as an actor: the authoritative store of product
//! records, addressed by [`ProductId`](crate::model::ProductId).
//!
//! ## Structure
//!
//! - [`entity`] - [`ProductCatalog`] state and its request handler
//! - [`messages`] - [`CatalogRequest`] accepted by the actor
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`new()`] - factory that creates the actor and its client
//!
//! ## Semantics
//!
//! Inserting over an existing id silently replaces the record, and removing
//! an absent id is a no-op - both by contract. Stock updates are the one
//! strict operation: adjusting an unknown product reports
//! [`CatalogError::ProductNotFound`] instead of silently doing nothing, so
//! a caller can always tell "updated" from "no such product".

pub mod entity;
pub mod error;
pub mod messages;

pub use entity::*;
pub use error::*;
pub use messages::*;

use crate::clients::CatalogClient;
use crate::framework::ServiceActor;

/// Creates a new catalog actor and its client.
pub fn new() -> (ServiceActor<ProductCatalog>, CatalogClient) {
    let (actor, handle) = ServiceActor::new(32, ProductCatalog::new());
    let client = CatalogClient::new(handle);

    (actor, client)
}
