//! Generic actor runtime that the cart is built on.
//!
//! A resource type implements [`ActorEntity`]; a [`ResourceActor`] owns every instance of
//! that type and applies requests one at a time, and a [`ResourceClient`] is the cloneable
//! handle callers use to talk to it.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor owning the entity store and the mailbox
//! - [`ResourceClient`] - Typed request/response handle
//! - [`ActorClient`] - Shared behavior for resource-specific client wrappers
//! - [`FrameworkError`] - Transport-level failures
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning real actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
