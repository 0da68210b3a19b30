//! Host configuration parsed from environment variables.

use std::time::Duration;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub proxy_timeout: Duration,
}

impl HostConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `QUENIFY_BACKEND_URL`: default `http://localhost:8000`
    /// - `QUENIFY_PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns `HostError::Config` when a value is present but invalid.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Config` when a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let port = parse_or(lookup("PORT"), "PORT", DEFAULT_PORT)?;
        let backend_url = parse_backend_url(lookup("QUENIFY_BACKEND_URL").as_deref())?;
        let timeout_secs =
            parse_or(lookup("QUENIFY_PROXY_TIMEOUT_SECS"), "QUENIFY_PROXY_TIMEOUT_SECS", DEFAULT_PROXY_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(HostError::Config("QUENIFY_PROXY_TIMEOUT_SECS must be positive".into()));
        }
        Ok(Self { port, backend_url, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, key: &str, default: T) -> Result<T, HostError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v.parse().map_err(|_| HostError::Config(format!("invalid {key}: {v}"))),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, HostError> {
    let url = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(HostError::Config(format!("QUENIFY_BACKEND_URL must be http(s): {url}")));
    }
    Ok(url.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
