//! # System Lifecycle
//!
//! Starting, wiring and stopping the cart actor.
//!
//! [`CartSystem::start`] is the one place where the catalog, the storage and the notifier
//! meet: the first two are injected into the actor as its context, the notifier goes into
//! the [`CartStore`](crate::clients::CartStore) handed back to callers.
//!
//! ```rust,ignore
//! let system = CartSystem::start(&settings, catalog, storage, notifier).await?;
//! system.store.add_product(ProductId(1)).await.ok();
//! system.shutdown().await?;
//! ```
//!
//! ## Shutdown
//!
//! Dropping the last `CartStore` closes the actor's mailbox; the actor finishes the
//! requests already queued and exits. `shutdown` drops the system's own handle and waits
//! for that to happen, so every store clone must be gone by then.
//!
//! ## Tracing
//!
//! [`setup_tracing`] installs the subscriber used by the binary.

pub mod cart_system;
pub mod tracing;

pub use self::cart_system::*;
pub use self::tracing::setup_tracing;
