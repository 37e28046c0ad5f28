//! # Cart Store
//!
//! The shopping cart of a storefront session, run as a resource actor on Tokio.
//!
//! Views add products, remove them and change quantities through a [`CartStore`]. Every
//! change is checked against the remote stock service, mirrored to durable storage under
//! one key, and reported to the user through a [`Notifier`] when it fails.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>`: a mailbox, a request loop and a mock client for tests.
//! The loop handles one request at a time, which is what keeps cart operations from
//! interleaving.
//!
//! ### 2. The Cart ([`cart_actor`], [`model`])
//! [`Cart`](model::Cart) implements [`ActorEntity`](framework::ActorEntity). Each action
//! computes the next line items on a copy, saves the snapshot, and only then commits.
//!
//! ### 3. The Outside World ([`catalog`], [`storage`], [`notify`])
//! Traits for the stock/product API, the key-value store and the notification sink, each
//! with a production and an in-memory implementation.
//!
//! ### 4. The Interface ([`clients`], [`lifecycle`])
//! [`CartStore`] is the handle views hold. [`CartSystem`](lifecycle::CartSystem) wires the
//! actor to its dependencies and shuts it down.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let system = CartSystem::start(
//!     &CartSettings::default(),
//!     Arc::new(HttpCatalog::new("http://localhost:3333", Duration::from_secs(10))?),
//!     Arc::new(FileStorage::new(".cart")),
//!     Arc::new(TracingNotifier),
//! )
//! .await?;
//!
//! let items = system.store.add_product(ProductId(1)).await?;
//! system.shutdown().await?;
//! ```
//!
//! [`CartStore`]: clients::CartStore
//! [`Notifier`]: notify::Notifier

pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod storage;
