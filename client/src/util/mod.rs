//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! theme) and form rules from page and component logic so they can be
//! tested without a browser.

pub mod auth;
pub mod dark_mode;
pub mod markdown;
pub mod poll;
pub mod storage;
pub mod validate;
