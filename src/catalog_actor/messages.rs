//! Requests accepted by the catalog actor.

use crate::catalog_actor::error::CatalogError;
use crate::framework::Responder;
use crate::model::{Product, ProductCreate, ProductId};

/// Requests handled by [`ProductCatalog`](crate::catalog_actor::ProductCatalog).
#[derive(Debug)]
pub enum CatalogRequest {
    /// Insert the record at `id`, silently replacing any existing one.
    AddProduct {
        id: ProductId,
        params: ProductCreate,
        respond_to: Responder<()>,
    },
    /// Remove the record at `id`; absent ids are a no-op.
    RemoveProduct {
        id: ProductId,
        respond_to: Responder<()>,
    },
    /// Apply a signed delta to the stock level and report the new level.
    UpdateStock {
        id: ProductId,
        delta: i64,
        respond_to: Responder<Result<i64, CatalogError>>,
    },
    /// Fetch a snapshot of the record at `id`.
    GetProduct {
        id: ProductId,
        respond_to: Responder<Option<Product>>,
    },
}
