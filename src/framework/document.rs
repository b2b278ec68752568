//! # Document Trait
//!
//! The `Document` trait is the contract every persisted aggregate (Cart, Item, …) implements
//! to be stored by the generic [`StoreActor`](crate::framework::StoreActor). It names the
//! collection, exposes the natural lookup key and the store-assigned [`StorageId`], and
//! provides the `on_save` / `on_load` hooks the actor calls around every write and read.
//!
//! # Architecture Note
//! The store logic (upsert, lookup, delete) is written *once* in `StoreActor<T>`; each
//! aggregate only describes how it is identified and what it needs checked or refreshed.
//!
//! # Provided Methods (Hooks)
//! - [`Document::on_save`]
//! - [`Document::on_load`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Identifier assigned by a store the first time a document is saved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageId(String);

impl StorageId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds the id a store hands out for its `sequence`-th document.
    pub fn sequential(collection: &str, sequence: u32) -> Self {
        Self(format!("{collection}_{sequence}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StorageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait that any aggregate must implement to be persisted by a `StoreActor`.
///
/// # Async & Context
/// The hooks are `#[async_trait]` so they can call other stores. The `Context` type is
/// injected into every hook when the actor is started with `run(context)`, which lets a
/// store depend on another store created after it ("late binding").
#[async_trait]
pub trait Document: Clone + Debug + Send + Sync + 'static {
    /// Natural key used by `find_by` (e.g., the customer id of a cart).
    type Key: Eq + Clone + Send + Sync + Display + Debug;

    /// The runtime context (dependencies) injected into the store.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type returned by the hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Collection name, used as the prefix of generated storage ids and in logs.
    const COLLECTION: &'static str;

    /// When set, the store keeps at most one document per [`Document::key`].
    const UNIQUE_KEY: bool = false;

    fn storage_id(&self) -> Option<&StorageId>;

    fn assign_storage_id(&mut self, id: StorageId);

    fn key(&self) -> &Self::Key;

    /// Called before the document is written. Returning an error rejects the save.
    async fn on_save(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on the copy handed back by `find_one` and `find_by`.
    async fn on_load(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
