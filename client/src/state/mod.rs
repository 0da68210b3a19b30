//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state type is held in an `RwSignal` context provided by `App`.
//! Pages fetch from `net::api` and write results here; components read.

pub mod auth;
pub mod bill;
pub mod cart;
pub mod menu;
pub mod orders;
pub mod reorder;
pub mod tables;
pub mod ui;
