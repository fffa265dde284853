//! # Order Desk
//!
//! An in-memory order-processing and product-catalog system built on the
//! Actor Model. Each stateful component - the product catalog and the order
//! queue - runs in its own Tokio task, owns its state exclusively, and
//! processes requests sequentially over a message channel. No locks, no
//! shared mutable state.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into four layers:
//!
//! 1. **Framework** ([`framework`]) - generic actor plumbing: the
//!    [`ServiceEntity`](framework::ServiceEntity) trait, the
//!    [`ServiceActor`](framework::ServiceActor) run loop, and the
//!    [`ServiceHandle`](framework::ServiceHandle) request/response channel.
//! 2. **Model** ([`model`]) - pure data structures: [`Product`](model::Product),
//!    [`Order`](model::Order), [`OrderStatus`](model::OrderStatus) and the id
//!    newtypes.
//! 3. **Actors** ([`catalog_actor`], [`queue_actor`]) - the domain state
//!    machines. The catalog is a keyed store of product records; the queue
//!    sequences orders FIFO, archives completed orders LIFO, and tracks a
//!    per-order status that only moves forward
//!    (`New -> Processing -> Completed`).
//! 4. **Interface** ([`clients`], [`runtime`]) - typed async clients that hide
//!    the message passing, plus the [`OrderSystem`](runtime::OrderSystem)
//!    orchestrator that spawns, wires, and shuts down the actors.
//!
//! ## Quick Start
//!
//! ```rust
//! use order_desk::model::{Order, OrderId, ProductCreate, ProductId};
//! use order_desk::runtime::OrderSystem;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Spin up both actors.
//!     let system = OrderSystem::new();
//!
//!     // Stock the catalog.
//!     let params = ProductCreate {
//!         name: "Widget".to_string(),
//!         price: 100.0,
//!         stock: 10,
//!     };
//!     system.catalog_client.add_product(ProductId(1), params).await?;
//!
//!     // Build an order from catalog data, then run it through the queue.
//!     let mut order = Order::new(OrderId(1), "Alice");
//!     if let Some(product) = system.catalog_client.get_product(ProductId(1)).await? {
//!         order.add_item(product.name, product.price);
//!         system.catalog_client.update_stock(ProductId(1), -1).await?;
//!     }
//!     system.queue_client.add_order(order).await?;
//!
//!     let processed = system.queue_client.process_next().await?.expect("one pending order");
//!     system.queue_client.complete_order(processed).await?;
//!
//!     system.shutdown().await.map_err(|e| e.into())
//! }
//! ```
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```
//!
//! ## Testing
//!
//! Integration tests in `tests/` drive real actors end to end. Client logic
//! is unit-tested without spawning actors via [`framework::mock`].

pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod model;
pub mod queue_actor;
pub mod runtime;
