//! Namespace and query value types

use bson::Document as BsonDocument;
use docstore_common::{DocStoreError, Result};

/// A (database, collection) pair identifying where documents live.
///
/// Both parts are validated non-empty at construction; a `Namespace` that
/// exists is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    database: String,
    collection: String,
}

impl Namespace {
    /// Creates a namespace, rejecting empty database or collection names.
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Result<Self> {
        let database = database.into();
        let collection = collection.into();

        if database.is_empty() {
            return Err(DocStoreError::Validation(
                "database name cannot be empty".to_string(),
            ));
        }
        if collection.is_empty() {
            return Err(DocStoreError::Validation(
                "collection name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            database,
            collection,
        })
    }

    /// Get the database name
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Get the collection name
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.database, self.collection)
    }
}

/// A target namespace plus an opaque filter predicate.
///
/// The filter is handed to the store verbatim and never mutated by this
/// layer; an empty filter matches every document in the namespace.
#[derive(Debug, Clone)]
pub struct Query {
    namespace: Namespace,
    filter: BsonDocument,
}

impl Query {
    /// Create a new query against a namespace with an empty filter
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            filter: BsonDocument::new(),
        }
    }

    /// Set the filter document
    pub fn filter(mut self, filter: BsonDocument) -> Self {
        self.filter = filter;
        self
    }

    /// Get the target namespace
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Get the filter document
    pub fn get_filter(&self) -> &BsonDocument {
        &self.filter
    }
}
