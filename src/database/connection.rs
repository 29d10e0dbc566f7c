use std::sync::Arc;

use crate::{
    config::{DATABASE_NAME_VAR, DATABASE_URL_VAR, DatabaseConfig},
    database::{DocumentStore, MongoStore},
};

/// Connects to the configured store. Any failure is logged and leaves the
/// service without a store; handlers then answer with `ServiceUnavailable`.
pub async fn connect_store(config: &DatabaseConfig) -> Option<Arc<dyn DocumentStore>> {
    let (Some(url), Some(name)) = (config.url.as_deref(), config.name.as_deref()) else {
        tracing::warn!(
            "{} or {} not set, starting without a database",
            DATABASE_URL_VAR,
            DATABASE_NAME_VAR
        );
        return None;
    };

    match MongoStore::connect(url, name).await {
        Ok(store) => {
            tracing::info!("Database connection established to '{}'", name);
            Some(Arc::new(store))
        }
        Err(e) => {
            tracing::error!("Failed to connect to database '{}': {}", name, e);
            None
        }
    }
}
