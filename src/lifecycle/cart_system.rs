use crate::cart_actor::{self, CartContext, CartError};
use crate::catalog::CatalogApi;
use crate::clients::CartStore;
use crate::config::CartSettings;
use crate::model::CartCreate;
use crate::notify::Notifier;
use crate::storage::CartStorage;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors from starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    /// The session cart could not be created.
    #[error("Failed to open cart: {0}")]
    Start(#[source] CartError),

    /// The actor task panicked or was cancelled.
    #[error("Cart actor task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// The running cart of one browsing session.
///
/// Owns the actor task and the [`CartStore`] that views use. Clone `store` to hand it out.
pub struct CartSystem {
    pub store: CartStore,
    handle: JoinHandle<()>,
}

impl CartSystem {
    /// Spawns the cart actor and opens the session cart.
    ///
    /// The cart starts from the snapshot stored under `settings.storage_key`, or empty if
    /// there is none.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::Start`] if the snapshot cannot be read.
    pub async fn start(
        settings: &CartSettings,
        catalog: Arc<dyn CatalogApi>,
        storage: Arc<dyn CartStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, SystemError> {
        let (actor, client) = cart_actor::new(settings.mailbox_size);
        let handle = tokio::spawn(actor.run(CartContext::new(catalog, storage)));

        let cart_id = match client.create(CartCreate::new(&settings.storage_key)).await {
            Ok(id) => id,
            Err(e) => {
                drop(client);
                let _ = handle.await;
                return Err(SystemError::Start(CartError::from_framework(e)));
            }
        };
        info!(%cart_id, key = %settings.storage_key, "Cart opened");

        Ok(Self {
            store: CartStore::new(client, cart_id, notifier),
            handle,
        })
    }

    /// Closes the mailbox and waits for the actor to drain it.
    ///
    /// Only returns once every clone of `store` has been dropped.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down cart system...");
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(SystemError::Task(e));
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
