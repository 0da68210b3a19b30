//! Networking modules for the restaurant backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps each backend endpoint, `error` folds HTTP failures into
//! `ApiError`, and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
