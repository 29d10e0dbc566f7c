use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use validator::{ValidationErrors, ValidationErrorsKind};

pub const STORE_NOT_CONFIGURED: &str = "Database not configured";

/// A single failed constraint on an inbound payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    ServiceUnavailable,
    Validation(Vec<FieldError>),
    PayloadRejected(StatusCode, String),
    DatabaseError(mongodb::error::Error),
    StoreError(String),
    MappingError(String),
    ConfigError(String),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldError::new(field, message)])
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadRejected(status, _) => *status,
            AppError::ServiceUnavailable
            | AppError::DatabaseError(_)
            | AppError::StoreError(_)
            | AppError::MappingError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ServiceUnavailable => write!(f, "{}", STORE_NOT_CONFIGURED),
            AppError::Validation(errors) => {
                write!(f, "Validation failed:")?;
                for error in errors {
                    write!(f, " {}: {};", error.field, error.message)?;
                }
                Ok(())
            }
            AppError::PayloadRejected(status, msg) => {
                write!(f, "Request body rejected ({}): {}", status, msg)
            }
            AppError::DatabaseError(e) => write!(f, "Database error: {}", e),
            AppError::StoreError(msg) => write!(f, "Store error: {}", msg),
            AppError::MappingError(msg) => write!(f, "Document mapping error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::MappingError(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Vec::new();
        collect_field_errors("", &errors, &mut fields);
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::Validation(fields)
    }
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| failure.code.to_string());
                    out.push(FieldError::new(&path, message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MappingError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = match self {
            AppError::ServiceUnavailable => {
                tracing::warn!("Request rejected: store handle is not configured");
                json!(STORE_NOT_CONFIGURED)
            }
            AppError::Validation(errors) => json!(errors),
            AppError::PayloadRejected(_, msg) => json!(msg),
            AppError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                json!("Database error")
            }
            AppError::StoreError(ref msg) => {
                tracing::error!("Store error: {}", msg);
                json!("Database error")
            }
            AppError::MappingError(ref msg) => {
                tracing::error!("Document mapping error: {}", msg);
                json!("Internal server error")
            }
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                json!("Server configuration error")
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn service_unavailable_renders_fixed_detail() {
        let (status, json) = body_json(AppError::ServiceUnavailable).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["detail"], "Database not configured");
    }

    #[tokio::test]
    async fn validation_renders_field_list() {
        let (status, json) =
            body_json(AppError::validation("items[0].quantity", "must be at least 1")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["detail"][0]["field"], "items[0].quantity");
        assert_eq!(json["detail"][0]["message"], "must be at least 1");
    }

    #[tokio::test]
    async fn rejected_payload_keeps_its_status() {
        let (status, json) = body_json(AppError::PayloadRejected(
            StatusCode::PAYLOAD_TOO_LARGE,
            "length limit exceeded".into(),
        ))
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["detail"], "length limit exceeded");
    }

    #[tokio::test]
    async fn store_error_hides_internal_message() {
        let (status, json) = body_json(AppError::StoreError("socket closed".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["detail"], "Database error");
    }
}
