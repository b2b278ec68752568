//! # Store Messages
//!
//! This module defines the message types exchanged between a `StoreClient` and a
//! `StoreActor`.

use crate::framework::document::{Document, StorageId};
use crate::framework::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to a store.
///
/// The variants mirror the operations of a key-value document store:
///
/// - **Save**: Upsert. Assigns a [`StorageId`] on first save and returns the canonical form.
/// - **FindOrInsert**: Lookup by natural key, saving the given document if nothing matches.
///   Runs as one request, so two callers can never both insert.
/// - **FindOne**: Lookup by storage id.
/// - **FindBy**: Lookup by the document's natural key ([`Document::Key`]).
/// - **Delete**: Removal by storage id. Reports whether anything was removed.
///
/// The enum is generic over `T: Document`, so a cart payload can never be sent to the
/// item store.
#[derive(Debug)]
pub enum StoreRequest<T: Document> {
    Save {
        document: T,
        respond_to: Response<T>,
    },
    FindOrInsert {
        document: T,
        respond_to: Response<T>,
    },
    FindOne {
        id: StorageId,
        respond_to: Response<Option<T>>,
    },
    FindBy {
        key: T::Key,
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: StorageId,
        respond_to: Response<bool>,
    },
}
