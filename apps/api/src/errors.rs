use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::github::GithubError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-success status returned by GitHub, relayed to the caller as-is.
    #[error("GitHub API responded with {0}")]
    Upstream(u16),

    /// GitHub could not be reached or its body could not be read.
    #[error("{message}: {source}")]
    Proxy {
        message: &'static str,
        source: GithubError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Upstream(upstream) => {
                tracing::warn!("GitHub API responded with {upstream}");
                (
                    StatusCode::from_u16(*upstream).unwrap_or(StatusCode::BAD_GATEWAY),
                    "UPSTREAM_ERROR",
                    format!("GitHub API responded with {upstream}"),
                )
            }
            AppError::Proxy { message, source } => {
                tracing::error!("{message}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROXY_ERROR",
                    message.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}
