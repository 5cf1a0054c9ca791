//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract every record type must implement to be
//! stored by the generic `ResourceActor`. It names the collection, the id type, the
//! create/update DTOs, the injected context and the error type, and provides lifecycle
//! hooks (`on_create`, `on_update`, `on_delete`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! You do **not** need to implement these unless you want to customize behavior.
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by a `ResourceActor`.
///
/// # Associated Types
/// A `Show` entity requires a `ShowCreate` payload; the compiler rejects any other
/// payload sent to its actor.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await other clients. The `Context` type is
/// injected into every hook when the actor is started with `run(context)`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Name of the collection, used as the envelope key and as a log field.
    const COLLECTION: &'static str;

    /// The unique identifier for this entity.
    /// Must be convertible from u32 for sequential id assignment, and ordered so the
    /// collection can be listed in id order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned id and the payload.
    /// Returning an error rejects the create; no id is consumed.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received for an existing entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
