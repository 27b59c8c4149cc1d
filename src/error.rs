//! Error types for grok-chat
//!
//! The xAI client itself hands back `reqwest::Error` untouched; this module
//! covers everything around it: bootstrap, mounting and the HTTP surface.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Mount failed on {target}: {source}")]
    Mount {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Plugin {plugin} failed to install: {message}")]
    Plugin {
        plugin: &'static str,
        message: String,
    },

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] JsonRejection),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    /// Status returned by the xAI API, when it answered at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, upstream_status) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::HttpError(e) => {
                let upstream = e.status().map(|s| s.as_u16());
                let message = match upstream {
                    Some(s) => format!("xAI API responded with status {}", s),
                    None => "xAI API unreachable".to_string(),
                };
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", message, upstream)
            }
            AppError::InvalidJson(rejection) => (
                rejection.status(),
                "INVALID_JSON",
                rejection.body_text(),
                None,
            ),
            AppError::Mount { .. } | AppError::Plugin { .. } | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
                upstream_status,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
