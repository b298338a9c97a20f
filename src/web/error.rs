use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::core::errors::TrackerError;

/// Request failure rendered as `{success: false, error}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        let status = match &err {
            TrackerError::NotFound(_) | TrackerError::CategoryNotFound(_) => StatusCode::NOT_FOUND,
            TrackerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TrackerError::CategoryExists(_) => StatusCode::CONFLICT,
            TrackerError::InvalidFormat { .. }
            | TrackerError::StorageError(_)
            | TrackerError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        } else {
            tracing::warn!(error = %err, "request rejected");
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "success": false, "error": self.message }));
        (self.status, body).into_response()
    }
}

/// Fatal startup failure of the web binary.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("server I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (TrackerError::NotFound("1".into()), StatusCode::NOT_FOUND),
            (
                TrackerError::CategoryNotFound("X".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                TrackerError::InvalidInput("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                TrackerError::CategoryExists("Transport".into()),
                StatusCode::CONFLICT,
            ),
            (
                TrackerError::StorageError("disk".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
