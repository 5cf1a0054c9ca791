//! Generic actor-backed store for resource collections.
//!
//! One [`ResourceActor`] owns one collection and serves create, list, get, update and
//! delete requests sent through a cloneable [`ResourceClient`]. Record types plug in by
//! implementing [`ActorEntity`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be stored by an actor
//! - [`ResourceActor`] - Task that owns a collection and processes requests in order
//! - [`ResourceClient`] - Typed sending half of the actor
//! - [`ActorClient`] - Trait for collection-specific client wrappers
//! - [`FrameworkError`] - Errors raised by the store plumbing
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning an actor.

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
