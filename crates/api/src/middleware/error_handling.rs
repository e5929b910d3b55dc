//! # Error Handling Middleware
//!
//! Maps agenda errors to HTTP status codes and JSON error bodies so that every
//! endpoint reports failures the same way.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jobfair_core::errors::AgendaError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use jobfair_api::middleware::error_handling::AppError;
/// use jobfair_core::errors::AgendaError;
///
/// async fn handler(duration: i64) -> Result<Json<i64>, AppError> {
///     if duration <= 0 {
///         return Err(AppError(AgendaError::Validation("duration must be positive".into())));
///     }
///     Ok(Json(duration))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub AgendaError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AgendaError::NotFound(_) => StatusCode::NOT_FOUND,
            AgendaError::Validation(_) => StatusCode::BAD_REQUEST,
            AgendaError::Conflict(_) => StatusCode::CONFLICT,
            AgendaError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AgendaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AgendaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self.0, "request failed");
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `AgendaResult` inside handlers.
impl From<AgendaError> for AppError {
    fn from(err: AgendaError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AgendaError::Database(err))
    }
}

// Extractor rejections carry axum's plain-text reason; it becomes the
// validation message.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(AgendaError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(AgendaError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(AgendaError::Validation(rejection.body_text()))
    }
}
