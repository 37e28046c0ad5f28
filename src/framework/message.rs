//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](super::ResourceClient) to a
//! [`ResourceActor`](super::ResourceActor). Each carries a oneshot responder.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// - **Create**: builds a new entity from [`ActorEntity::Create`] and returns its id.
/// - **Get**: returns a snapshot of the entity, or `None`.
/// - **Action**: runs an [`ActorEntity::Action`] against an existing entity.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
