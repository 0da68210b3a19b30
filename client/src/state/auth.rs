//! Staff session state for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and staff pages to pick credentials for API calls.
//! Customers never appear here; they are identified by a backend cookie.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::Auth;
use crate::net::types::StaffRole;

/// Staff token and role, loaded from `localStorage` after hydration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub role: Option<StaffRole>,
    /// True until storage has been read; guards wait on it.
    pub loading: bool,
    /// Set by an explicit logout; guards then send the user home rather
    /// than to the sign-in page.
    pub signed_out: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, role: None, loading: true, signed_out: false }
    }
}

impl AuthState {
    /// Credential for endpoints shared with customers.
    pub fn api_auth(&self) -> Auth {
        Auth::from_token(self.token.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn sign_in(&mut self, token: String, role: StaffRole) {
        self.token = Some(token);
        self.role = Some(role);
        self.loading = false;
        self.signed_out = false;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.role = None;
        self.loading = false;
        self.signed_out = true;
    }
}
