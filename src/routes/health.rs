use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{
    AppState,
    models::{DEFAULT_BRAND, DiagnosticsReport},
    services::diagnostics_service,
};

pub async fn read_root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "brand": DEFAULT_BRAND, "status": "ok" })),
    )
}

/// Connectivity report. Always answers 200; store problems are described in
/// the body.
pub async fn test_connectivity(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let report = diagnostics_service::run_diagnostics(state.store.as_deref(), &state.database).await;

    Json(report)
}
