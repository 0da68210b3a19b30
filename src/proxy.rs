//! `/api/*` forwarding to the restaurant backend.
//!
//! The browser only ever talks to this host, so the backend's session cookie
//! is first-party and no CORS preflight reaches the backend. Requests and
//! responses are copied verbatim apart from hop-by-hop headers.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{CONNECTION, HeaderMap, HeaderName};
use axum::response::Response;

use crate::error::HostError;
use crate::state::AppState;

/// Largest request body forwarded (menu images are the biggest payloads).
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

const HOP_BY_HOP: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

/// Join the backend origin with the incoming path and query.
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path_and_query.trim_start_matches('/'))
}

/// Copy `headers`, dropping hop-by-hop headers and any named in `Connection`.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !is_dropped(name, &listed) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

fn is_dropped(name: &HeaderName, listed: &[String]) -> bool {
    let name = name.as_str();
    HOP_BY_HOP.contains(&name) || listed.iter().any(|l| l == name)
}

/// Forward one request and relay the backend's answer.
///
/// # Errors
///
/// `HostError::Body` for unreadable or oversized bodies and
/// `HostError::Upstream` when the backend cannot be reached.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, HostError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.backend_url, path_and_query);

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| HostError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(bytes)
        .send()
        .await
        .map_err(|e| HostError::Upstream(e.to_string()))?;

    let status = upstream.status();
    tracing::debug!(method = %parts.method, path = parts.uri.path(), %status, "forwarded");

    let headers = forwardable_headers(upstream.headers());
    let body = upstream.bytes().await.map_err(|e| HostError::Upstream(e.to_string()))?;

    let mut resp = Response::new(Body::from(body));
    *resp.status_mut() = status;
    *resp.headers_mut() = headers;
    Ok(resp)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
