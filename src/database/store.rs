use async_trait::async_trait;
use mongodb::bson::Document;

use crate::error::Result;

/// The document store capability the routes depend on.
///
/// Documents are exchanged in their store-native form; mapping into typed
/// models happens in `crate::models`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the underlying database.
    fn name(&self) -> &str;

    /// Inserts one document and returns the store-assigned id as a string.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<String>;

    /// Returns documents matching every key of `filter` by equality.
    /// A `limit` of zero means no cap; a negative one is read as its
    /// absolute value.
    async fn find(&self, collection: &str, filter: Document, limit: i64) -> Result<Vec<Document>>;

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64>;

    async fn list_collection_names(&self) -> Result<Vec<String>>;
}
