use super::*;

#[test]
fn role_from_query_accepts_wait_and_kitchen() {
    assert_eq!(role_from_query(Some("Wait")), Some(StaffRole::Wait));
    assert_eq!(role_from_query(Some("Kitchen")), Some(StaffRole::Kitchen));
}

#[test]
fn role_from_query_rejects_manager_and_junk() {
    assert_eq!(role_from_query(Some("manager")), None);
    assert_eq!(role_from_query(Some("chef")), None);
    assert_eq!(role_from_query(None), None);
}

#[test]
fn add_staff_error_explains_duplicate_email() {
    let err = ApiError::Status { status: 400, message: "username taken".to_owned() };
    assert!(add_staff_error(&err).contains("already be registered"));
    assert_eq!(add_staff_error(&ApiError::Unauthorized(String::new())), ApiError::Unauthorized(String::new()).user_message());
}
