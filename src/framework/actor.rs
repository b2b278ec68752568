//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the task that owns one collection of documents.
//! It implements the "Server" side of the Actor Model, processing requests sequentially
//! so every read and write of the collection is serialized without locks.

use crate::framework::client::StoreClient;
use crate::framework::document::{Document, StorageId};
use crate::framework::error::StoreError;
use crate::framework::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of documents.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state (`documents`) and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Each store processes its own requests *sequentially* in a loop, so the `documents` map
/// needs no `Mutex`. Two callers racing a read-modify-write of the same cart still get
/// last-write-wins on the whole document; the actor only guarantees that each individual
/// request is applied atomically.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other store clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use async_trait::async_trait;
/// use cart_resource::framework::{Document, StorageId, StoreActor};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: Option<StorageId>, title: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// #[async_trait]
/// impl Document for Note {
///     type Key = String;
///     type Context = ();
///     type Error = NoteError;
///     const COLLECTION: &'static str = "note";
///     fn storage_id(&self) -> Option<&StorageId> { self.id.as_ref() }
///     fn assign_storage_id(&mut self, id: StorageId) { self.id = Some(id); }
///     fn key(&self) -> &String { &self.title }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let saved = client.save(Note { id: None, title: "hello".into() }).await.unwrap();
///     assert_eq!(saved.id.unwrap().as_str(), "note_1");
/// }
/// ```
///
/// # Operations
///
/// * **Save**:
///     1. Calls the `on_save` hook (which may reject the document).
///     2. For a [`Document::UNIQUE_KEY`] collection, rejects a key held by another document.
///     3. Assigns the next sequential [`StorageId`] if the document has none.
///     4. Inserts or replaces the document and returns the stored copy.
///
/// * **FindOrInsert**:
///     1. Returns the oldest document stored under the same key, loaded.
///     2. Otherwise saves the given document as above.
///
/// * **FindOne / FindBy**:
///     1. Clones the matching document(s), oldest first.
///     2. Calls the `on_load` hook on each copy.
///
/// * **Delete**:
///     1. Removes the document if present. Missing documents are not an error.
pub struct StoreActor<T: Document> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    documents: HashMap<StorageId, Entry<T>>,
    next_id: u32,
    next_sequence: u64,
}

/// A stored document and its insertion position.
struct Entry<T> {
    sequence: u64,
    document: T,
}

impl<T: Document> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client
    /// calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            documents: HashMap::new(),
            next_id: 1,
            next_sequence: 0,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the store's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every `on_save` / `on_load` hook.
    pub async fn run(mut self, context: T::Context) {
        let collection = T::COLLECTION;
        info!(collection, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save {
                    document,
                    respond_to,
                } => {
                    debug!(collection, ?document, "Save");
                    let _ = respond_to.send(self.store(document, &context).await);
                }
                StoreRequest::FindOrInsert {
                    document,
                    respond_to,
                } => {
                    let existing = self.matching(document.key()).into_iter().next();
                    let result = match existing {
                        Some(found) => {
                            debug!(collection, key = %document.key(), "FindOrInsert found existing");
                            Self::load(found, &context).await
                        }
                        None => self.store(document, &context).await,
                    };
                    let _ = respond_to.send(result);
                }
                StoreRequest::FindOne { id, respond_to } => {
                    let found = match self.documents.get(&id).map(|entry| entry.document.clone()) {
                        Some(document) => Self::load(document, &context).await.map(Some),
                        None => Ok(None),
                    };
                    debug!(collection, %id, found = matches!(found, Ok(Some(_))), "FindOne");
                    let _ = respond_to.send(found);
                }
                StoreRequest::FindBy { key, respond_to } => {
                    let matching = self.matching(&key);
                    debug!(collection, %key, count = matching.len(), "FindBy");
                    let mut loaded = Vec::with_capacity(matching.len());
                    let mut failure = None;
                    for document in matching {
                        match Self::load(document, &context).await {
                            Ok(document) => loaded.push(document),
                            Err(e) => {
                                failure = Some(e);
                                break;
                            }
                        }
                    }
                    let _ = respond_to.send(match failure {
                        Some(e) => Err(e),
                        None => Ok(loaded),
                    });
                }
                StoreRequest::Delete { id, respond_to } => {
                    let removed = self.documents.remove(&id).is_some();
                    if removed {
                        info!(collection, %id, size = self.documents.len(), "Deleted");
                    } else {
                        debug!(collection, %id, "Delete of missing document ignored");
                    }
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(collection, size = self.documents.len(), "Shutdown");
    }

    /// Copies of the documents stored under `key`, oldest first.
    fn matching(&self, key: &T::Key) -> Vec<T> {
        let mut entries: Vec<&Entry<T>> = self
            .documents
            .values()
            .filter(|entry| entry.document.key() == key)
            .collect();
        entries.sort_by_key(|entry| entry.sequence);
        entries.into_iter().map(|entry| entry.document.clone()).collect()
    }

    /// Runs `on_save`, assigns a storage id to a new document and writes it.
    async fn store(&mut self, mut document: T, context: &T::Context) -> Result<T, StoreError> {
        let collection = T::COLLECTION;
        if let Err(e) = document.on_save(context).await {
            warn!(collection, error = %e, "on_save failed");
            return Err(StoreError::Document(Box::new(e)));
        }

        if T::UNIQUE_KEY {
            let taken = self.documents.iter().any(|(id, entry)| {
                entry.document.key() == document.key() && Some(id) != document.storage_id()
            });
            if taken {
                warn!(collection, key = %document.key(), "Key already stored");
                return Err(StoreError::DuplicateKey(document.key().to_string()));
            }
        }

        let id = match document.storage_id().cloned() {
            Some(id) => id,
            None => {
                let id = StorageId::sequential(collection, self.next_id);
                self.next_id += 1;
                document.assign_storage_id(id.clone());
                id
            }
        };
        if document.storage_id() != Some(&id) {
            warn!(collection, %id, "Document lost its storage id");
            return Err(StoreError::Document(
                format!("{collection} document did not keep storage id {id}").into(),
            ));
        }

        let sequence = match self.documents.get(&id) {
            Some(entry) => entry.sequence,
            None => {
                self.next_sequence += 1;
                self.next_sequence
            }
        };
        self.documents.insert(
            id.clone(),
            Entry {
                sequence,
                document: document.clone(),
            },
        );
        info!(collection, %id, size = self.documents.len(), "Saved");
        Ok(document)
    }

    async fn load(mut document: T, context: &T::Context) -> Result<T, StoreError> {
        match document.on_load(context).await {
            Ok(()) => Ok(document),
            Err(e) => {
                warn!(collection = T::COLLECTION, error = %e, "on_load failed");
                Err(StoreError::Document(Box::new(e)))
            }
        }
    }
}
