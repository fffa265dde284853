//! State and request handler for the product catalog.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::catalog_actor::error::CatalogError;
use crate::catalog_actor::messages::CatalogRequest;
use crate::framework::ServiceEntity;
use crate::model::{Product, ProductId};

/// Authoritative store of product records, addressed by id.
///
/// All operations are direct hash-map lookups, O(1) expected. Reads reply
/// with clones so no caller ever holds a live reference into the store.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    products: HashMap<ProductId, Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }
}

#[async_trait]
impl ServiceEntity for ProductCatalog {
    type Request = CatalogRequest;

    async fn handle(&mut self, request: CatalogRequest) {
        match request {
            CatalogRequest::AddProduct {
                id,
                params,
                respond_to,
            } => {
                debug!(%id, ?params, "AddProduct");
                let product = Product::new(id.clone(), params.name, params.price, params.stock);
                let replaced = self.products.insert(id.clone(), product).is_some();
                info!(%id, replaced, size = self.products.len(), "Product stored");
                let _ = respond_to.send(());
            }
            CatalogRequest::RemoveProduct { id, respond_to } => {
                let removed = self.products.remove(&id).is_some();
                debug!(%id, removed, size = self.products.len(), "RemoveProduct");
                let _ = respond_to.send(());
            }
            CatalogRequest::UpdateStock {
                id,
                delta,
                respond_to,
            } => {
                debug!(%id, delta, "UpdateStock");
                let result = match self.products.get_mut(&id) {
                    Some(product) => {
                        product.stock += delta;
                        info!(%id, stock = product.stock, "Stock updated");
                        Ok(product.stock)
                    }
                    None => {
                        warn!(%id, "Not found");
                        Err(CatalogError::ProductNotFound(id))
                    }
                };
                let _ = respond_to.send(result);
            }
            CatalogRequest::GetProduct { id, respond_to } => {
                let product = self.products.get(&id).cloned();
                debug!(%id, found = product.is_some(), "GetProduct");
                let _ = respond_to.send(product);
            }
        }
    }
}
