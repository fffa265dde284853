//! # Catalog Client
//!
//! Provides a high-level API for interacting with the catalog actor.
//! It wraps a `ServiceHandle<CatalogRequest>` and exposes one async method
//! per catalog operation.

use tracing::{debug, instrument};

use crate::catalog_actor::{CatalogError, CatalogRequest};
use crate::framework::ServiceHandle;
use crate::model::{Product, ProductCreate, ProductId};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    handle: ServiceHandle<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(handle: ServiceHandle<CatalogRequest>) -> Self {
        Self { handle }
    }

    /// Insert the record at `id`, silently replacing any existing one.
    #[instrument(skip(self))]
    pub async fn add_product(
        &self,
        id: ProductId,
        params: ProductCreate,
    ) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| CatalogRequest::AddProduct {
                id,
                params,
                respond_to,
            })
            .await
            .map_err(|e| CatalogError::ActorCommunicationError(e.to_string()))
    }

    /// Remove the record at `id`; removing an absent id is a no-op.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, id: ProductId) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| CatalogRequest::RemoveProduct { id, respond_to })
            .await
            .map_err(|e| CatalogError::ActorCommunicationError(e.to_string()))
    }

    /// Apply `delta` (which may be negative) to the stock of `id` and
    /// return the new level.
    ///
    /// Fails with [`CatalogError::ProductNotFound`] for an unknown id; the
    /// catalog is left untouched in that case.
    #[instrument(skip(self))]
    pub async fn update_stock(&self, id: ProductId, delta: i64) -> Result<i64, CatalogError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| CatalogRequest::UpdateStock {
                id,
                delta,
                respond_to,
            })
            .await
            .map_err(|e| CatalogError::ActorCommunicationError(e.to_string()))?
    }

    /// Fetch a snapshot of the record at `id`, if present.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        debug!("Sending request");
        self.handle
            .call(|respond_to| CatalogRequest::GetProduct { id, respond_to })
            .await
            .map_err(|e| CatalogError::ActorCommunicationError(e.to_string()))
    }
}
