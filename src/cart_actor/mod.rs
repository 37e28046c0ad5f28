//! # Cart Actor
//!
//! The cart of a browsing session as a resource actor.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`] and the user-facing messages
//! - [`actions`] - [`CartAction`]: add, remove, update amount
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor needs the catalog (stock and product lookups) and the snapshot storage. Both
//! arrive through [`CartContext`] when the actor is started:
//!
//! ```rust,ignore
//! let (actor, client) = cart_actor::new(32);
//! tokio::spawn(actor.run(CartContext::new(catalog, storage)));
//! let cart_id = client.create(CartCreate::new("@RocketShoes:cart")).await?;
//! ```
//!
//! ## Ordering
//!
//! Actions against one cart are applied strictly in arrival order. An action that is
//! waiting on the catalog holds back every later action, so two quick clicks on "add"
//! always yield two increments checked against the stock.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::corrupt_key;
pub use error::*;

use crate::catalog::CatalogApi;
use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Cart;
use crate::storage::CartStorage;
use std::sync::Arc;

/// Runtime dependencies of the cart actor.
#[derive(Clone)]
pub struct CartContext {
    catalog: Arc<dyn CatalogApi>,
    storage: Arc<dyn CartStorage>,
}

impl CartContext {
    pub fn new(catalog: Arc<dyn CatalogApi>, storage: Arc<dyn CartStorage>) -> Self {
        Self { catalog, storage }
    }

    pub fn catalog(&self) -> &dyn CatalogApi {
        self.catalog.as_ref()
    }

    pub fn storage(&self) -> &dyn CartStorage {
        self.storage.as_ref()
    }
}

/// Creates a new Cart actor and its client.
pub fn new(mailbox_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(mailbox_size)
}
