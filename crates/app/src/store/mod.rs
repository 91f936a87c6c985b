//! Clients for the remote JSON document store and blob store.

mod database;
mod storage;

pub use database::{FirebaseClient, FirebaseConfig, MockStoreClient, StoreClient, StoreError};
pub use storage::{BlobStore, FirebaseStorageClient, MockBlobStore};
