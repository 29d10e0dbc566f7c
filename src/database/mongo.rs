use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{Document, doc},
};

use crate::{database::DocumentStore, error::Result, models::id_string};

pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Opens a client for `url` and verifies the server answers a ping.
    pub async fn connect(url: &str, name: &str) -> Result<Self> {
        let client = Client::with_uri_str(url).await?;
        let database = client.database(name);

        database.run_command(doc! { "ping": 1 }).await?;

        Ok(Self { database })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        self.database.name()
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<String> {
        let result = self.collection(collection).insert_one(document).await?;

        Ok(id_string(&result.inserted_id))
    }

    async fn find(&self, collection: &str, filter: Document, limit: i64) -> Result<Vec<Document>> {
        let cursor = self.collection(collection).find(filter).limit(limit).await?;
        let documents = cursor.try_collect().await?;

        Ok(documents)
    }

    async fn count_documents(&self, collection: &str, filter: Document) -> Result<u64> {
        let count = self.collection(collection).count_documents(filter).await?;

        Ok(count)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        let names = self.database.list_collection_names().await?;

        Ok(names)
    }
}
