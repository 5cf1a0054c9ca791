//! # Show Client
//!
//! High-level API for the `Show` actor. Wraps a `ResourceClient<Show>` and converts
//! framework failures into [`ShowError`].
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Show, ShowCreate, ShowId, ShowUpdate};
use crate::show_actor::ShowError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Show actor.
#[derive(Clone)]
pub struct ShowClient {
    inner: ResourceClient<Show>,
}

impl ShowClient {
    pub fn new(inner: ResourceClient<Show>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Show> for ShowClient {
    type Error = ShowError;

    fn inner(&self) -> &ResourceClient<Show> {
        &self.inner
    }

    /// Entity errors raised by the actor are boxed `ShowError`s; unwrap them so a
    /// validation failure stays a validation failure on this side of the channel.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ShowError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast::<ShowError>() {
                Ok(show_error) => *show_error,
                Err(other) => ShowError::ActorCommunicationError(other.to_string()),
            },
            other => ShowError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ShowClient {
    /// Stores a new show and returns it as stored, with its assigned id.
    #[instrument(skip(self))]
    pub async fn create_show(&self, params: ShowCreate) -> Result<Show, ShowError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches a show by id, failing with [`ShowError::NotFound`] when absent.
    #[instrument(skip(self))]
    pub async fn get_show(&self, id: ShowId) -> Result<Show, ShowError> {
        self.get(id)
            .await?
            .ok_or_else(|| ShowError::NotFound(id.to_string()))
    }

    /// Merges `update` into the stored show and returns the result.
    #[instrument(skip(self))]
    pub async fn update_show(&self, id: ShowId, update: ShowUpdate) -> Result<Show, ShowError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(Self::map_error)
    }
}
