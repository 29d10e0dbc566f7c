use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{AppConfig, DatabaseConfig},
    database::{self, DocumentStore},
    error::{AppError, Result},
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Option<Arc<dyn DocumentStore>>,
    pub database: Arc<DatabaseConfig>,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, database: DatabaseConfig) -> Self {
        Self {
            store,
            database: Arc::new(database),
        }
    }

    /// The store handle, or `ServiceUnavailable` when none was configured.
    pub fn store(&self) -> Result<&dyn DocumentStore> {
        self.store.as_deref().ok_or(AppError::ServiceUnavailable)
    }
}

pub async fn build(config: &AppConfig) -> Router {
    let store = database::connect_store(&config.database).await;
    let state = AppState::new(store, config.database.clone());

    router(state, config.server.max_body_size)
}

pub fn router(state: AppState, max_body_size: usize) -> Router {
    routes::create_router()
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
