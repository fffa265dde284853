//! The `OrderSystem` orchestrator.

use tracing::{error, info};

use crate::catalog_actor;
use crate::clients::{CatalogClient, QueueClient};
use crate::queue_actor;

/// The main runtime orchestrator for the order processing system.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle management**: starting and stopping both actors
/// - **Client distribution**: handing out the typed clients callers use
/// - **Graceful shutdown**: closing channels and awaiting the actor tasks
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// system.catalog_client.add_product(id, params).await?;
/// system.queue_client.add_order(order).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the catalog actor.
    pub catalog_client: CatalogClient,

    /// Client for interacting with the queue actor.
    pub queue_client: QueueClient,

    /// Task handles for the running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Creates and initializes a new `OrderSystem` with both actors running.
    pub fn new() -> Self {
        let (catalog_actor, catalog_client) = catalog_actor::new();
        let catalog_handle = tokio::spawn(catalog_actor.run());

        let (queue_actor, queue_client) = queue_actor::new();
        let queue_handle = tokio::spawn(queue_actor.run());

        Self {
            catalog_client,
            queue_client,
            handles: vec![catalog_handle, queue_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the request channels; each actor drains
    /// its inbox, logs its final state, and exits. An error is returned if
    /// an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.catalog_client);
        drop(self.queue_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
