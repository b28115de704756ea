use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::packing::{LoadError, LoadErrorKind, OPTIMAL_SOURCE_URL};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Packing error: {0}")]
    Packing(#[from] LoadError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String, Option<String>) {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            AppError::Packing(err) => match err.kind() {
                LoadErrorKind::NotFound => (
                    StatusCode::NOT_FOUND,
                    "PACKING_FILE_NOT_FOUND",
                    err.to_string(),
                    Some(format!(
                        "Download {OPTIMAL_SOURCE_URL} and save it as '{}'",
                        err.path().display()
                    )),
                ),
                LoadErrorKind::EmptyFile => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EMPTY_FILE",
                    err.to_string(),
                    Some(format!("Re-download {OPTIMAL_SOURCE_URL}")),
                ),
                LoadErrorKind::ParseError => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PARSE_ERROR",
                    err.to_string(),
                    Some("The file is likely corrupted. Please re-download it.".to_string()),
                ),
                LoadErrorKind::MalformedFormat => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "MALFORMED_FORMAT",
                    err.to_string(),
                    None,
                ),
                LoadErrorKind::Io => {
                    tracing::error!("Packing file I/O error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "The packing file could not be read".to_string(),
                        None,
                    )
                }
            },
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, guidance) = self.parts();

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(guidance) = guidance {
            error["guidance"] = json!(guidance);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
