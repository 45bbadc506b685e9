//! MongoDB facade for docstore
//!
//! This crate gives callers a narrow, typed surface over the MongoDB driver:
//! connect and verify liveness, run single-document CRUD, close. The driver
//! itself stays behind the [`StoreHandle`] trait so the operation layer can
//! be exercised against a substitute store.
//!
//! # Features
//! - Connection lifecycle with an up-front liveness check
//! - Typed reads and writes via serde, raw reads via BSON documents
//! - Zero-match reads and writes reported as empty successes, not errors
//! - Errors carry a stable context string with the driver cause chained

pub mod connection;
pub mod handle;
pub mod ops;
pub mod query;

pub use connection::{Client, ConnectOptions};
pub use docstore_common::{DocStoreError, Result};
pub use handle::{DeleteOutcome, InsertOutcome, MongoHandle, StoreHandle, UpdateOutcome};
pub use query::{Namespace, Query};
