//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor that owns a collection.
///
/// The variants map onto the store operations of a single collection:
///
/// - **Create**: assigns the next id, stores the entity built from [`ActorEntity::Create`]
///   and replies with the stored entity.
/// - **List**: returns every stored entity, ordered by id.
/// - **Get**: fetches one entity by id, `None` if absent.
/// - **Update**: applies [`ActorEntity::Update`] to an existing entity and returns the result.
/// - **Delete**: removes an entity.
///
/// Update and Delete look the id up and mutate in the same step, so no other request
/// can interleave between the existence check and the write.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
