//! # Show Actor
//!
//! The store for the "shows" collection: a [`ResourceActor`] over [`Show`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Show`]
//! - [`error`] - [`ShowError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use shows_api::model::ShowCreate;
//! use shows_api::show_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = show_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let show = client
//!         .create_show(ShowCreate {
//!             name: "Breaking Bad".to_string(),
//!             episodes_seen: 5,
//!         })
//!         .await?;
//!     assert_eq!(show.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ShowClient;
use crate::framework::ResourceActor;
use crate::model::Show;

/// Creates a new Show actor and its client.
///
/// `buffer_size` is clamped to at least 1.
pub fn new(buffer_size: usize) -> (ResourceActor<Show>, ShowClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size.max(1));
    (actor, ShowClient::new(generic_client))
}
