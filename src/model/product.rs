//! Product records and their creation payload.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A product record as stored in the catalog.
///
/// Reads from the catalog hand out clones of this record, never live
/// references; the only mutation paths are re-insertion and stock updates
/// inside the catalog actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// Signed: stock deltas are applied without validation and may drive
    /// the level below zero.
    pub stock: i64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog key, chosen by the caller
    /// * `name` - Product name
    /// * `price` - Product price
    /// * `stock` - On-hand stock level
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }
}

/// Payload for inserting a product into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}
