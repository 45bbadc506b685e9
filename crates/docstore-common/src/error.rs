//! Error types for docstore

use thiserror::Error;

/// Result type alias for docstore operations
pub type Result<T> = std::result::Result<T, DocStoreError>;

type Source = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for all docstore operations
///
/// Every failure from the underlying store is wrapped with a stable,
/// human-readable context describing the failing step; the original cause
/// stays reachable through [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum DocStoreError {
    /// Connection establishment, liveness check, or teardown failed.
    #[error("{context}")]
    Connection {
        context: String,
        #[source]
        source: Option<Source>,
    },

    /// The raw-document read path matched zero documents.
    #[error("no documents found")]
    NotFound,

    /// A matched document could not be decoded into the requested type.
    #[error("{context}")]
    Decode {
        context: String,
        #[source]
        source: Source,
    },

    /// Any other failure reported by the underlying store during a
    /// find, insert, update, or delete.
    #[error("{context}")]
    Operation {
        context: String,
        #[source]
        source: Option<Source>,
    },

    /// A namespace or query value failed validation before reaching the store.
    #[error("validation error: {0}")]
    Validation(String),
}

impl DocStoreError {
    /// Wraps a connection-phase failure with its cause.
    pub fn connection(context: impl Into<String>, source: impl Into<Source>) -> Self {
        DocStoreError::Connection {
            context: context.into(),
            source: Some(source.into()),
        }
    }

    /// A connection-phase failure with no underlying cause to chain.
    pub fn connection_msg(context: impl Into<String>) -> Self {
        DocStoreError::Connection {
            context: context.into(),
            source: None,
        }
    }

    /// Wraps a decode failure with its cause.
    pub fn decode(context: impl Into<String>, source: impl Into<Source>) -> Self {
        DocStoreError::Decode {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Wraps a store operation failure with its cause.
    pub fn operation(context: impl Into<String>, source: impl Into<Source>) -> Self {
        DocStoreError::Operation {
            context: context.into(),
            source: Some(source.into()),
        }
    }

    /// Returns true if this is the zero-matches error from the raw read path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocStoreError::NotFound)
    }

    /// Returns true if this error arose from the connection lifecycle.
    pub fn is_connection(&self) -> bool {
        matches!(self, DocStoreError::Connection { .. })
    }
}
