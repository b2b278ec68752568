//! # Generic Store Client
//!
//! This module defines the generic client for communicating with store actors.

use crate::framework::document::{Document, StorageId};
use crate::framework::error::StoreError;
use crate::framework::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// The client holds only a sender, so cloning is cheap and clones can be shared across
/// tasks. Every method resolves to `Result<…, StoreError>`; a closed channel is reported
/// as [`StoreError::Unavailable`].
#[derive(Clone)]
pub struct StoreClient<T: Document> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Document> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn save(&self, document: T) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Save {
                document,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    /// The document stored under `document`'s key, or `document` itself once saved.
    pub async fn find_or_insert(&self, document: T) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::FindOrInsert {
                document,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn find_one(&self, id: StorageId) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::FindOne { id, respond_to })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn find_by(&self, key: T::Key) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::FindBy { key, respond_to })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn delete(&self, id: StorageId) -> Result<bool, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}
