//! Store handle trait and the driver-backed implementation
//!
//! The facade never touches `mongodb::Client` outside this module. Everything
//! the operation layer needs is expressed by [`StoreHandle`], so tests can
//! swap in an in-memory store.

use async_trait::async_trait;
use bson::{doc, Bson, Document as BsonDocument};
use docstore_common::{DocStoreError, Result};
use futures::TryStreamExt;
use mongodb::options::{ReadPreference, SelectionCriteria};
use mongodb::{Client as DriverClient, Collection};

use crate::query::Namespace;

/// Outcome of a single-document insert.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertOutcome {
    /// Identifier assigned to the inserted document by the store.
    pub inserted_id: Bson,
}

/// Outcome of a single-document update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// Number of documents the filter matched (0 or 1).
    pub matched_count: u64,
    /// Number of documents actually modified.
    pub modified_count: u64,
    /// Identifier of an upserted document, when the store performed one.
    pub upserted_id: Option<Bson>,
}

/// Outcome of a single-document delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Number of documents deleted (0 or 1).
    pub deleted_count: u64,
}

/// The narrow surface this layer needs from the underlying driver.
///
/// Implementations must be safe for concurrent use from multiple call-sites
/// without external locking; the facade holds no locks of its own and leans
/// entirely on that contract. Implementations perform no retries beyond what
/// the driver itself provides.
#[async_trait]
pub trait StoreHandle: Send + Sync {
    /// Find at most one document matching the filter.
    async fn find_one(
        &self,
        namespace: &Namespace,
        filter: BsonDocument,
    ) -> Result<Option<BsonDocument>>;

    /// Find every document matching the filter, fully materialized in
    /// the store's natural cursor order.
    async fn find_many(
        &self,
        namespace: &Namespace,
        filter: BsonDocument,
    ) -> Result<Vec<BsonDocument>>;

    /// Insert one document.
    async fn insert_one(
        &self,
        namespace: &Namespace,
        document: BsonDocument,
    ) -> Result<InsertOutcome>;

    /// Apply an update expression to at most one matching document.
    async fn update_one(
        &self,
        namespace: &Namespace,
        filter: BsonDocument,
        update: BsonDocument,
    ) -> Result<UpdateOutcome>;

    /// Delete at most one matching document.
    async fn delete_one(
        &self,
        namespace: &Namespace,
        filter: BsonDocument,
    ) -> Result<DeleteOutcome>;

    /// Liveness check against a primary-capable server.
    async fn ping(&self) -> Result<()>;

    /// Release the underlying connection.
    async fn shutdown(self) -> Result<()>
    where
        Self: Sized;
}

/// Store handle backed by the real MongoDB driver.
pub struct MongoHandle {
    client: DriverClient,
}

impl std::fmt::Debug for MongoHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoHandle").finish_non_exhaustive()
    }
}

impl MongoHandle {
    pub(crate) fn new(client: DriverClient) -> Self {
        Self { client }
    }

    fn collection(&self, namespace: &Namespace) -> Collection<BsonDocument> {
        self.client
            .database(namespace.database())
            .collection(namespace.collection())
    }
}

#[async_trait]
impl StoreHandle for MongoHandle {
    async fn find_one(
        &self,
        namespace: &Namespace,
        filter: BsonDocument,
    ) -> Result<Option<BsonDocument>> {
        self.collection(namespace)
            .find_one(filter)
            .await
            .map_err(|e| DocStoreError::operation("failed to execute find query", e))
    }

    async fn find_many(
        &self,
        namespace: &Namespace,
        filter: BsonDocument,
    ) -> Result<Vec<BsonDocument>> {
        let cursor = self
            .collection(namespace)
            .find(filter)
            .await
            .map_err(|e| DocStoreError::operation("failed to execute find query", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| DocStoreError::operation("failed to decode query results", e))
    }

    async fn insert_one(
        &self,
        namespace: &Namespace,
        document: BsonDocument,
    ) -> Result<InsertOutcome> {
        let result = self
            .collection(namespace)
            .insert_one(document)
            .await
            .map_err(|e| DocStoreError::operation("failed to insert document", e))?;

        Ok(InsertOutcome {
            inserted_id: result.inserted_id,
        })
    }

    async fn update_one(
        &self,
        namespace: &Namespace,
        filter: BsonDocument,
        update: BsonDocument,
    ) -> Result<UpdateOutcome> {
        let result = self
            .collection(namespace)
            .update_one(filter, update)
            .await
            .map_err(|e| DocStoreError::operation("failed to update document", e))?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id,
        })
    }

    async fn delete_one(
        &self,
        namespace: &Namespace,
        filter: BsonDocument,
    ) -> Result<DeleteOutcome> {
        let result = self
            .collection(namespace)
            .delete_one(filter)
            .await
            .map_err(|e| DocStoreError::operation("failed to delete document", e))?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }

    async fn ping(&self) -> Result<()> {
        // Routed primary-preferred so a degraded replica set still answers.
        let criteria = SelectionCriteria::ReadPreference(ReadPreference::PrimaryPreferred {
            options: Default::default(),
        });

        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .selection_criteria(criteria)
            .await
            .map_err(|e| DocStoreError::connection("failed to ping", e))?;

        Ok(())
    }

    async fn shutdown(self) -> Result<()> {
        self.client.shutdown().await;
        Ok(())
    }
}
