use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};

use crate::{
    database::DocumentStore,
    error::{AppError, Result},
    models::id_string,
};

/// In-process document store with MongoDB-like equality filtering.
///
/// Collections are created on first insert and keep insertion order.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    name: String,
    collections: Arc<RwLock<BTreeMap<String, Vec<Document>>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Snapshot of every document in `collection`.
    pub fn documents(&self, collection: &str) -> Result<Vec<Document>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| AppError::StoreError("memory store lock poisoned".to_string()))?;

        Ok(collections.get(collection).cloned().unwrap_or_default())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<String> {
        let id = document
            .get("_id")
            .cloned()
            .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));

        let mut stored = Document::new();
        stored.insert("_id", id.clone());
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }

        let mut collections = self
            .collections
            .write()
            .map_err(|_| AppError::StoreError("memory store lock poisoned".to_string()))?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(stored);

        Ok(id_string(&id))
    }

    async fn find(&self, collection: &str, filter: Document, limit: i64) -> Result<Vec<Document>> {
        let cap = match limit.unsigned_abs() {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };

        let documents = self
            .documents(collection)?
            .into_iter()
            .filter(|document| matches(document, &filter))
            .take(cap)
            .collect();

        Ok(documents)
    }

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64> {
        let count = self
            .documents(collection)?
            .iter()
            .filter(|document| matches(document, &filter))
            .count();

        Ok(count as u64)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| AppError::StoreError("memory store lock poisoned".to_string()))?;

        Ok(collections.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn insert_assigns_object_id_first() {
        let store = MemoryStore::default();

        let id = store
            .insert_one("product", doc! { "title": "Scarf" })
            .await
            .unwrap();

        let documents = store.documents("product").unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].keys().next().map(String::as_str), Some("_id"));
        assert_eq!(documents[0].get_object_id("_id").unwrap().to_hex(), id);
    }

    #[tokio::test]
    async fn find_applies_equality_filter_and_limit() {
        let store = MemoryStore::default();
        for (title, featured) in [("a", true), ("b", false), ("c", true), ("d", true)] {
            store
                .insert_one("product", doc! { "title": title, "featured": featured })
                .await
                .unwrap();
        }

        let featured = store
            .find("product", doc! { "featured": true }, 2)
            .await
            .unwrap();
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|d| d.get_bool("featured").unwrap()));

        let all = store.find("product", doc! {}, 0).await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn collections_appear_after_first_insert() {
        let store = MemoryStore::default();
        assert!(store.list_collection_names().await.unwrap().is_empty());

        store.insert_one("order", doc! { "total": 1.0 }).await.unwrap();

        assert_eq!(store.list_collection_names().await.unwrap(), vec!["order"]);
        assert_eq!(store.count_documents("order", doc! {}).await.unwrap(), 1);
    }
}
