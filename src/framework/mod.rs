//! Generic document-store engine.
//!
//! This module provides the building blocks every store in the crate is made of: a single
//! task owning an in-memory collection and a cloneable client that talks to it over a
//! channel.
//!
//! # Main Components
//!
//! - [`Document`] - Trait that persisted aggregates implement to be managed by a store
//! - [`StoreActor`] - Generic actor that owns one collection
//! - [`StoreClient`] - Type-safe async handle for sending requests to a store
//! - [`StoreError`] - Failures a store can report back to its callers
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test code that sits on top of a store without
//! spawning a real actor.

pub mod actor;
pub mod client;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use document::{Document, StorageId};
pub use error::StoreError;
pub use message::{Response, StoreRequest};
