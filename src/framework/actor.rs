//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns one collection. It
//! processes requests sequentially, so it has exclusive access to the store without
//! any locking.

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// This struct is the "server" half of the actor. It owns the state (`store`) and the
/// receiver end of the channel. Because messages are handled one at a time, every
/// check-then-act sequence (look up an id, then update or delete it) is atomic with
/// respect to other clients.
///
/// # Usage Pattern
///
/// 1. **Create**: call `ResourceActor::new()` to get the actor and its client.
/// 2. **Run**: spawn `actor.run(context)` on the runtime.
/// 3. **Use**: clone the client into every task that needs the collection.
///
/// # Id Assignment
///
/// Ids come from a counter starting at 1. The counter only advances when a create
/// succeeds, and ids are never handed out twice, even after a delete. While nothing
/// has been deleted, an entity's id equals its 1-based position in [`ResourceRequest::List`].
/// Once the counter can no longer advance, every create fails with
/// [`FrameworkError::IdsExhausted`].
///
/// A create replies with the stored entity, so no other request can remove it before
/// the caller sees it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space. Must be greater than zero.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` argument is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let collection = T::COLLECTION;
        info!(collection, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(collection, ?params, "Create");
                    let Some(following) = self.next_id.checked_add(1) else {
                        warn!(collection, next_id = self.next_id, "Ids exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(collection, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.next_id = following;
                            self.store.insert(id.clone(), item.clone());
                            info!(collection, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(collection, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(collection, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(collection, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(collection, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(collection, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // Work on a copy so a failing hook leaves the stored entity untouched.
                    let mut item = current.clone();
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(collection, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), item.clone());
                    info!(collection, %id, "Updated");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(collection, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(collection, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(collection, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(collection, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(collection, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Show, ShowCreate, ShowId};

    fn params(name: &str) -> ShowCreate {
        ShowCreate {
            name: name.to_string(),
            episodes_seen: 1,
        }
    }

    #[tokio::test]
    async fn test_create_replies_with_stored_entity() {
        let (actor, client) = ResourceActor::<Show>::new(4);
        tokio::spawn(actor.run(()));

        let created = client.create(params("Dark")).await.unwrap();
        assert_eq!(created, Show::new(ShowId(1), "Dark", 1));
        assert_eq!(client.get(ShowId(1)).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_create_fails_once_ids_are_exhausted() {
        let (mut actor, client) = ResourceActor::<Show>::new(4);
        actor.next_id = u32::MAX - 1;
        tokio::spawn(actor.run(()));

        let last = client.create(params("Dark")).await.unwrap();
        assert_eq!(last.id, ShowId(u32::MAX - 1));

        let result = client.create(params("Ozark")).await;
        assert!(matches!(result, Err(FrameworkError::IdsExhausted)));

        let all = client.list().await.unwrap();
        assert_eq!(all, vec![last]);
    }
}
