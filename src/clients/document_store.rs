//! # DocumentStore Trait
//!
//! Provides a common interface for the typed store clients, adding default `save`,
//! `find_one` and `delete` methods built on top of a generic `StoreClient`.
use crate::framework::{Document, StorageId, StoreClient, StoreError};
use async_trait::async_trait;

/// Trait for typed store clients to inherit the standard store operations.
///
/// Implementors only provide access to their inner [`StoreClient`]; lookups specific to
/// one collection (`find_by_customer_id`, …) are added as inherent methods.
///
/// # Example
///
/// ```rust
/// use cart_resource::clients::DocumentStore;
/// use cart_resource::framework::StoreClient;
/// use cart_resource::model::Item;
///
/// struct AuditedItems {
///     inner: StoreClient<Item>,
/// }
///
/// impl DocumentStore<Item> for AuditedItems {
///     fn inner(&self) -> &StoreClient<Item> {
///         &self.inner
///     }
/// }
///
/// async fn usage(store: AuditedItems) {
///     // save(), find_one() and delete() are provided automatically!
///     let saved = store.save(Item::from_id("sock-1")).await.unwrap();
///     let _ = store.delete(&saved).await;
/// }
/// ```
#[async_trait]
pub trait DocumentStore<T: Document>: Send + Sync {
    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Upsert a document and return its canonical stored form.
    #[tracing::instrument(skip(self, document), fields(collection = T::COLLECTION))]
    async fn save(&self, document: T) -> Result<T, StoreError> {
        tracing::debug!(?document, "Sending request");
        self.inner().save(document).await
    }

    /// Fetch a document by storage id.
    #[tracing::instrument(skip(self), fields(collection = T::COLLECTION))]
    async fn find_one(&self, id: StorageId) -> Result<Option<T>, StoreError> {
        tracing::debug!("Sending request");
        self.inner().find_one(id).await
    }

    /// Delete a stored document.
    ///
    /// A document that was never saved has nothing to delete, so this resolves to
    /// `Ok(false)` without contacting the store.
    #[tracing::instrument(skip(self, document), fields(collection = T::COLLECTION))]
    async fn delete(&self, document: &T) -> Result<bool, StoreError> {
        let Some(id) = document.storage_id().cloned() else {
            tracing::debug!("Document was never saved");
            return Ok(false);
        };
        tracing::debug!(%id, "Sending request");
        self.inner().delete(id).await
    }
}
