//! # ActorEntity Trait
//!
//! The contract a resource must satisfy to be owned by a [`ResourceActor`](super::ResourceActor).
//! Associated types pin down the id, the creation payload, the custom actions and the
//! dependencies injected at run time, so a cart action can never be sent to some other
//! resource's actor.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they can await remote services. The `Context` type is handed to
/// every hook; it is supplied to `run()` rather than `new()`, so dependencies can be wired
/// after the actor and its client exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier for this entity. Generated ids are built from a `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `AddProduct`).
    type Action: Send + Sync + Debug;

    /// Value returned by a successful action.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum for the whole entity, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its id and creation payload.
    /// Runs synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored.
    /// A failure here discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
