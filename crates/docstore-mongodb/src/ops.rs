//! CRUD operations over a verified client
//!
//! Every operation resolves the query's namespace on the owned handle,
//! executes, and normalizes failures into [`DocStoreError`]. Zero matches is
//! a successful empty result everywhere except [`Client::read_one_document`],
//! which reports it as [`DocStoreError::NotFound`]. That asymmetry is part of
//! the contract; callers pick the path with the semantics they want.

use bson::Document as BsonDocument;
use docstore_common::{DocStoreError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::connection::Client;
use crate::handle::{DeleteOutcome, InsertOutcome, StoreHandle, UpdateOutcome};
use crate::query::{Namespace, Query};

impl<H: StoreHandle> Client<H> {
    /// Find at most one document matching the query and decode it.
    ///
    /// Zero matches is not an error; the result is `Ok(None)`.
    pub async fn read_one<T: DeserializeOwned>(&self, query: &Query) -> Result<Option<T>> {
        debug!(namespace = %query.namespace(), "read_one");

        let found = self
            .handle()
            .find_one(query.namespace(), query.get_filter().clone())
            .await?;

        match found {
            Some(document) => {
                let value = bson::from_document(document)
                    .map_err(|e| DocStoreError::decode("failed to decode query results", e))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Find at most one document matching the query and return it as raw BSON.
    ///
    /// Unlike [`Client::read_one`], zero matches is reported as
    /// [`DocStoreError::NotFound`]. Callers that want the silent not-found
    /// behavior must use the typed read.
    pub async fn read_one_document(&self, query: &Query) -> Result<BsonDocument> {
        debug!(namespace = %query.namespace(), "read_one_document");

        self.handle()
            .find_one(query.namespace(), query.get_filter().clone())
            .await?
            .ok_or(DocStoreError::NotFound)
    }

    /// Find every document matching the query, fully materialized.
    ///
    /// The entire result set is drained into memory before returning, in the
    /// store's natural cursor order. An unbounded filter over a large
    /// collection means unbounded memory; callers own that trade-off.
    pub async fn read_many<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>> {
        debug!(namespace = %query.namespace(), "read_many");

        let documents = self
            .handle()
            .find_many(query.namespace(), query.get_filter().clone())
            .await?;

        documents
            .into_iter()
            .map(|document| {
                bson::from_document(document)
                    .map_err(|e| DocStoreError::decode("failed to decode query results", e))
            })
            .collect()
    }

    /// Insert exactly one document into the namespace.
    ///
    /// Returns the identifier the store assigned to the document.
    pub async fn insert_one<T: Serialize>(
        &self,
        namespace: &Namespace,
        document: &T,
    ) -> Result<InsertOutcome> {
        debug!(namespace = %namespace, "insert_one");

        let document = bson::to_document(document)
            .map_err(|e| DocStoreError::operation("failed to insert document", e))?;

        self.handle().insert_one(namespace, document).await
    }

    /// Apply an update expression to at most one document matching the query.
    ///
    /// A filter matching nothing is a successful no-op reported through
    /// `matched_count == 0`, not an error.
    pub async fn update_one(&self, query: &Query, update: BsonDocument) -> Result<UpdateOutcome> {
        debug!(namespace = %query.namespace(), "update_one");

        self.handle()
            .update_one(query.namespace(), query.get_filter().clone(), update)
            .await
    }

    /// Delete at most one document matching the query.
    ///
    /// A filter matching nothing is a successful no-op reported through
    /// `deleted_count == 0`, not an error.
    pub async fn delete_one(&self, query: &Query) -> Result<DeleteOutcome> {
        debug!(namespace = %query.namespace(), "delete_one");

        self.handle()
            .delete_one(query.namespace(), query.get_filter().clone())
            .await
    }
}
