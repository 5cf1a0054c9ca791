//! # ActorClient Trait
//!
//! Common interface for collection-specific clients, adding default `list`, `get` and
//! `delete` methods on top of a generic `ResourceClient`.
use super::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard read/delete operations.
///
/// Implementors supply the inner client and a mapping from [`FrameworkError`] into their
/// own error type; `list`, `get` and `delete` come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch every entity in the collection, ordered by id.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
