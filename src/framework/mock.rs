//! # Mock Stores
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered from a
//! queue of expectations instead of an in-memory collection. Use it to unit-test code that
//! sits on top of a store (resources, services) and, above all, to inject store failures
//! that a real actor would never produce.
//!
//! | Feature | MockStore | Real StoreActor |
//! |---------|-----------|-----------------|
//! | **State** | None (scripted answers) | Real documents |
//! | **Order** | Strict, one expectation per request | Any |
//! | **Error Injection** | Easy (`return_err`) | Only via document hooks |
//!
//! ```rust
//! use cart_resource::framework::mock::MockStore;
//! use cart_resource::framework::StoreError;
//! use cart_resource::model::{Cart, CustomerId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Cart>::new();
//!     mock.expect_find_by(CustomerId::new("alice")).return_err(StoreError::Unavailable);
//!
//!     let result = mock.client().find_by(CustomerId::new("alice")).await;
//!     assert!(matches!(result, Err(StoreError::Unavailable)));
//!     mock.verify();
//! }
//! ```
//!
//! The lower-level [`create_mock_client`] returns the request receiver directly, for tests
//! that want to inspect the exact payload a caller sent.

use crate::framework::client::StoreClient;
use crate::framework::document::{Document, StorageId};
use crate::framework::error::StoreError;
use crate::framework::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock store and the answer to give.
enum Expectation<T: Document> {
    Save {
        response: Result<T, StoreError>,
    },
    FindOrInsert {
        key: T::Key,
        response: Result<T, StoreError>,
    },
    FindOne {
        id: StorageId,
        response: Result<Option<T>, StoreError>,
    },
    FindBy {
        key: T::Key,
        response: Result<Vec<T>, StoreError>,
    },
    Delete {
        id: StorageId,
        response: Result<bool, StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store with expectation tracking.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::<Item>::new();
/// mock.expect_save().return_ok(saved_item);
/// mock.expect_delete(StorageId::new("item_1")).return_ok(true);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockStore<T: Document> {
    client: StoreClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockStore<T> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StoreRequest::Save { respond_to, .. }, Some(Expectation::Save { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindOrInsert {
                            document,
                            respond_to,
                        },
                        Some(Expectation::FindOrInsert {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(
                            document.key(),
                            &expected,
                            "find_or_insert called with unexpected key"
                        );
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindOne { id, respond_to },
                        Some(Expectation::FindOne {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "find_one called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindBy { key, respond_to },
                        Some(Expectation::FindBy {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "find_by called with unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `save` operation.
    pub fn expect_save(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Save {
            response,
        })
    }

    /// Expects a `find_or_insert` operation for a document keyed by `key`.
    pub fn expect_find_or_insert(&mut self, key: T::Key) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::FindOrInsert { key, response }
        })
    }

    /// Expects a `find_one` operation for `id`.
    pub fn expect_find_one(&mut self, id: StorageId) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::FindOne { id, response }
        })
    }

    /// Expects a `find_by` operation for `key`.
    pub fn expect_find_by(&mut self, key: T::Key) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::FindBy { key, response }
        })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: StorageId) -> ExpectationBuilder<T, bool> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Delete { id, response }
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder that records the answer for one expected request.
pub struct ExpectationBuilder<T: Document, R> {
    expectations: Expectations<T>,
    make: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: Document, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        make: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Tests drive the receiver by hand (see [`expect_save`], [`expect_find_or_insert`]) to assert
/// on the exact payloads sent and to answer them.
pub fn create_mock_client<T: Document>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Save request.
pub async fn expect_save<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save {
            document,
            respond_to,
        }) => Some((document, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindOrInsert request.
pub async fn expect_find_or_insert<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindOrInsert {
            document,
            respond_to,
        }) => Some((document, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindBy request.
pub async fn expect_find_by<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Key, oneshot::Sender<Result<Vec<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindBy { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request.
pub async fn expect_delete<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(StorageId, oneshot::Sender<Result<bool, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
