//! Staff session persistence and route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The staff token and role live in `localStorage` so a reload keeps staff
//! signed in. Customers never hold a token; their session is a backend
//! cookie. Staff pages install the same redirect so a missing token or the
//! wrong role always lands in the same place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::storage;
use crate::net::types::StaffRole;
use crate::state::auth::AuthState;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const RESTAURANT_KEY: &str = "restaurant_id";

/// Read the persisted staff session.
pub fn load_session() -> AuthState {
    let token = storage::load_string(TOKEN_KEY).filter(|t| !t.is_empty());
    let role = storage::load_string(ROLE_KEY).and_then(|r| StaffRole::from_wire(&r));
    AuthState { token, role, loading: false, signed_out: false }
}

pub fn persist_session(token: &str, role: StaffRole) {
    storage::save_string(TOKEN_KEY, token);
    storage::save_string(ROLE_KEY, role.wire());
}

pub fn clear_session() {
    storage::remove(TOKEN_KEY);
    storage::remove(ROLE_KEY);
}

/// Restaurant picked on the dine-in screen, kept until the table is chosen.
pub fn save_restaurant_id(id: i64) {
    storage::save_string(RESTAURANT_KEY, &id.to_string());
}

pub fn load_restaurant_id() -> Option<i64> {
    storage::load_string(RESTAURANT_KEY)?.parse().ok()
}

pub fn clear_restaurant_id() {
    storage::remove(RESTAURANT_KEY);
}

/// Where a staff page should send the user, if anywhere.
///
/// No token goes to `/signin` (or `/` right after a logout); a token for
/// another role goes to that role's home. Managers may open every staff page.
pub fn redirect_target(state: &AuthState, required: StaffRole) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    if state.token.is_none() {
        return Some(if state.signed_out { "/" } else { "/signin" });
    }
    match state.role {
        Some(StaffRole::Manager) => None,
        Some(role) if role == required => None,
        Some(role) => Some(role.home_route()),
        None => None,
    }
}

/// Redirect whenever `redirect_target` says the current user does not belong.
pub fn install_staff_redirect<F>(auth: RwSignal<AuthState>, required: StaffRole, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(&auth.get(), required) {
            navigate(target, NavigateOptions::default());
        }
    });
}
