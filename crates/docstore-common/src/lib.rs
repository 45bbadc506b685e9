//! Common utilities for docstore
//!
//! This crate provides the shared error type used across all docstore crates.

pub mod error;

pub use error::{DocStoreError, Result};
