use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use lapiozo_api::{
    AppError, AppState, Result,
    app::router,
    config::DatabaseConfig,
    database::{DocumentStore, MemoryStore},
};
use mongodb::bson::Document;
use tower::ServiceExt;

const TEST_BODY_LIMIT: usize = 1024 * 1024;

/// Store whose every call fails, for exercising degraded paths.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn insert_one(&self, _collection: &str, _document: Document) -> Result<String> {
        Err(AppError::StoreError("connection refused".to_string()))
    }

    async fn find(&self, _collection: &str, _filter: Document, _limit: i64) -> Result<Vec<Document>> {
        Err(AppError::StoreError("connection refused".to_string()))
    }

    async fn count_documents(&self, _collection: &str, _filter: Document) -> Result<u64> {
        Err(AppError::StoreError("connection refused".to_string()))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        Err(AppError::StoreError(
            "server selection timeout after 30000ms while listing collections".to_string(),
        ))
    }
}

pub fn configured_database() -> DatabaseConfig {
    DatabaseConfig {
        url: Some("mongodb://localhost:27017".to_string()),
        name: Some("lapiozo".to_string()),
    }
}

pub fn app_with_store(store: Arc<dyn DocumentStore>) -> Router {
    router(
        AppState::new(Some(store), configured_database()),
        TEST_BODY_LIMIT,
    )
}

pub fn app_with_memory_store() -> (Router, MemoryStore) {
    let store = MemoryStore::new("lapiozo");
    (app_with_store(Arc::new(store.clone())), store)
}

pub fn app_without_store() -> Router {
    router(
        AppState::new(None, DatabaseConfig::default()),
        TEST_BODY_LIMIT,
    )
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}
