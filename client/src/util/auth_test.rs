use super::*;

fn signed_in(role: Option<StaffRole>) -> AuthState {
    AuthState { token: Some("abc".to_owned()), role, loading: false, signed_out: false }
}

#[test]
fn redirects_to_sign_in_without_token() {
    let state = AuthState { token: None, role: None, loading: false, signed_out: false };
    assert_eq!(redirect_target(&state, StaffRole::Kitchen), Some("/signin"));
}

#[test]
fn redirects_home_after_logout() {
    let mut state = signed_in(Some(StaffRole::Manager));
    state.sign_out();
    assert_eq!(redirect_target(&state, StaffRole::Manager), Some("/"));
}

#[test]
fn does_not_redirect_while_loading() {
    let state = AuthState { token: None, role: None, loading: true, signed_out: false };
    assert_eq!(redirect_target(&state, StaffRole::Wait), None);
}

#[test]
fn sends_other_roles_to_their_home() {
    assert_eq!(redirect_target(&signed_in(Some(StaffRole::Kitchen)), StaffRole::Wait), Some("/kitchenstaff"));
    assert_eq!(redirect_target(&signed_in(Some(StaffRole::Wait)), StaffRole::Manager), Some("/waitstaff"));
}

#[test]
fn keeps_matching_role_and_managers() {
    assert_eq!(redirect_target(&signed_in(Some(StaffRole::Wait)), StaffRole::Wait), None);
    assert_eq!(redirect_target(&signed_in(Some(StaffRole::Manager)), StaffRole::Kitchen), None);
    assert_eq!(redirect_target(&signed_in(None), StaffRole::Kitchen), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_session_is_signed_out_without_browser() {
    persist_session("abc", StaffRole::Manager);
    save_restaurant_id(4);
    let state = load_session();
    assert_eq!(state.token, None);
    assert_eq!(load_restaurant_id(), None);
    clear_session();
    clear_restaurant_id();
}
