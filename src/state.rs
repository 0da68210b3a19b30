//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used to forward `/api/*` calls and the
//! backend origin they go to.

use std::sync::Arc;

use crate::config::HostConfig;
use crate::error::HostError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns `HostError::Config` if the HTTP client cannot be built.
    pub fn new(config: &HostConfig) -> Result<Self, HostError> {
        // Redirects and cookies belong to the browser, so both pass through untouched.
        let http = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| HostError::Config(format!("http client: {e}")))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
