use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clicker_types::ErrorBody;
use std::{io, path::PathBuf};
use thiserror::Error;

/// A failure reading or writing the click log.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corrupt click log {} at line {line}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode click entry: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| StoreError::Io { path, source }
    }
}

/// The error type of the route handlers. Every failure is a 500 with an [`ErrorBody`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] StoreError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(err = %self.0, "request failed");

        let body = ErrorBody {
            detail: format!("Database error: {}", self.0),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
