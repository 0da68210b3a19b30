//! Host error type.
//!
//! Upstream failures answer 502 so the browser can tell "backend down" from a
//! bug in the host itself.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment value could not be parsed.
    #[error("config: {0}")]
    Config(String),

    /// The backend could not be reached or its response could not be read.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The incoming request body exceeded the forwarding limit or was unreadable.
    #[error("request body rejected: {0}")]
    Body(String),

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HostError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Body(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Config(_) | Self::Leptos(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request failed in host");
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
