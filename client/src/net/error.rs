//! Error type for REST calls against the restaurant backend.
//!
//! ERROR HANDLING
//! ==============
//! HTTP status codes are folded into a small set of variants so pages can
//! branch on the cases they care about (bad credentials, table taken) and
//! fall back to `user_message` for everything else.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// 401/403 from the backend, with its message when it sent one.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// 404 from the backend.
    #[error("not found: {0}")]
    NotFound(String),
    /// 409 from the backend.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Any other non-success status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// A response body that did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Arguments rejected before sending.
    #[error("{0}")]
    Invalid(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map a non-success status and its body text to an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| body.trim().to_owned());
        match status {
            401 | 403 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            _ => ApiError::Status { status, message },
        }
    }

    /// Text suitable for showing in a form or banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Sorry, the server is unreachable at the moment.".to_owned(),
            ApiError::Unauthorized(m)
            | ApiError::NotFound(m)
            | ApiError::Conflict(m)
            | ApiError::Status { message: m, .. }
                if !m.is_empty() =>
            {
                m.clone()
            }
            ApiError::Unauthorized(_) => "You are not authorized. Please sign in again.".to_owned(),
            ApiError::NotFound(_) => "Not found.".to_owned(),
            ApiError::Conflict(_) => "That resource is already in use.".to_owned(),
            ApiError::Status { status, .. } => format!("Something went wrong ({status})."),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_owned(),
            ApiError::Invalid(m) => m.clone(),
            ApiError::Unavailable => "Not available.".to_owned(),
        }
    }
}

/// Pull a human message out of the backend's assorted error bodies:
/// `{"error": ".."}`, `{"message": ".."}`, `{"Conflict": ".."}` or DRF field
/// errors like `{"name": ["This field may not be blank."]}`.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;
    for key in ["error", "message", "detail"] {
        if let Some(s) = obj.get(key).and_then(serde_json::Value::as_str) {
            return Some(s.to_owned());
        }
    }
    obj.iter().find_map(|(key, v)| match v {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => items
            .first()
            .and_then(serde_json::Value::as_str)
            .map(|s| format!("{key}: {s}")),
        _ => None,
    })
}
