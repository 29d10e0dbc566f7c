use crate::{
    config::DatabaseConfig,
    database::DocumentStore,
    models::{DiagnosticsReport, EnvProbe, StoreProbe},
};

pub async fn probe_store(store: Option<&dyn DocumentStore>) -> StoreProbe {
    let Some(store) = store else {
        return StoreProbe::Absent;
    };

    match store.list_collection_names().await {
        Ok(collections) => StoreProbe::Working { collections },
        Err(e) => {
            tracing::warn!("Listing collections on '{}' failed: {}", store.name(), e);
            StoreProbe::ListFailed {
                error: e.to_string(),
            }
        }
    }
}

pub fn probe_env(database: &DatabaseConfig) -> (EnvProbe, EnvProbe) {
    (
        EnvProbe::from_presence(database.url_is_set()),
        EnvProbe::from_presence(database.name_is_set()),
    )
}

pub async fn run_diagnostics(
    store: Option<&dyn DocumentStore>,
    database: &DatabaseConfig,
) -> DiagnosticsReport {
    let store_probe = probe_store(store).await;
    let (url_probe, name_probe) = probe_env(database);

    DiagnosticsReport::compose(store_probe, url_probe, name_probe)
}
