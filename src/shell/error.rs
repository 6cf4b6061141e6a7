use async_graphql::ErrorExtensions;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStoreError;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Conflict(_)
            | ApplicationError::Store(EventStoreError::VersionMismatch { .. }) => {
                StatusCode::CONFLICT
            }
            ApplicationError::Store(EventStoreError::Backend(_))
            | ApplicationError::Projection(_)
            | ApplicationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.status_code() {
            StatusCode::BAD_REQUEST => "VALIDATION_ERROR",
            StatusCode::NOT_FOUND => "NOT_FOUND",
            StatusCode::CONFLICT => "CONFLICT",
            _ => "INTERNAL_ERROR",
        }
    }

    /// Message safe to hand to clients. Server-side failures are logged and
    /// replaced with a generic text.
    pub fn public_message(&self) -> String {
        match self {
            ApplicationError::Validation(msg) => msg.clone(),
            ApplicationError::Store(EventStoreError::VersionMismatch { .. }) => {
                "estimate was modified concurrently, retry the request".to_string()
            }
            ApplicationError::NotFound(_) | ApplicationError::Conflict(_) => self.to_string(),
            ApplicationError::Store(_)
            | ApplicationError::Projection(_)
            | ApplicationError::Unexpected(_) => {
                tracing::error!(error = %self, "request failed");
                INTERNAL_MESSAGE.to_string()
            }
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({
            "error": self.public_message(),
            "code": self.code(),
        });
        (status, Json(body)).into_response()
    }
}

pub fn into_graphql_error(error: ApplicationError) -> async_graphql::Error {
    let code = error.code();
    async_graphql::Error::new(error.public_message()).extend_with(|_, e| e.set("code", code))
}

/// Malformed bodies are the caller's to fix, so they map to 400 like any
/// other validation failure.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApplicationError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApplicationError::Validation(rejection.body_text()))
}

pub fn required<T>(value: Option<T>, field: &str) -> Result<T, ApplicationError> {
    value.ok_or_else(|| ApplicationError::Validation(format!("{field} is required")))
}

pub fn required_text(value: Option<String>, field: &str) -> Result<String, ApplicationError> {
    required(value.filter(|v| !v.trim().is_empty()), field)
}
