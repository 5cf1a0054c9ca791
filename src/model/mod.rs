//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod show;

pub use show::*;
