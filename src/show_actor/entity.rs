//! [`ActorEntity`] implementation for [`Show`].

use super::ShowError;
use crate::framework::ActorEntity;
use crate::model::{Show, ShowCreate, ShowId, ShowUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Show {
    const COLLECTION: &'static str = "shows";

    type Id = ShowId;
    type Create = ShowCreate;
    type Update = ShowUpdate;
    type Context = ();
    type Error = ShowError;

    /// Builds a Show from a validated create payload.
    ///
    /// Rejects the payload only when the name is empty and the count is negative.
    fn from_create_params(id: ShowId, params: ShowCreate) -> Result<Self, Self::Error> {
        if !params.is_acceptable() {
            return Err(ShowError::Validation(
                "name is empty and episodes_seen is negative".to_string(),
            ));
        }
        Ok(Self::new(id, params.name, params.episodes_seen))
    }

    /// Merges a partial update into the stored show.
    ///
    /// Fields left unset (sent as `""`) keep their stored value.
    async fn on_update(&mut self, update: ShowUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(episodes_seen) = update.episodes_seen {
            self.episodes_seen = episodes_seen;
        }
        Ok(())
    }
}
