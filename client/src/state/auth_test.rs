use super::*;

#[test]
fn default_state_is_loading_without_token() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_signed_in());
    assert_eq!(state.api_auth(), Auth::Customer);
}

#[test]
fn sign_in_sets_token_and_role() {
    let mut state = AuthState::default();
    state.sign_in("tok".to_owned(), StaffRole::Kitchen);
    assert!(!state.loading);
    assert_eq!(state.role, Some(StaffRole::Kitchen));
    assert_eq!(state.api_auth(), Auth::Staff("tok".to_owned()));
}

#[test]
fn sign_out_clears_everything() {
    let mut state = AuthState::default();
    state.sign_in("tok".to_owned(), StaffRole::Manager);
    state.sign_out();
    assert_eq!(state, AuthState { token: None, role: None, loading: false, signed_out: true });
}
