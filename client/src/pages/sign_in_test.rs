use super::*;

#[test]
fn bad_credentials_read_as_invalid() {
    assert_eq!(sign_in_error(&ApiError::Unauthorized(String::new())), "Invalid credentials");
    let bad_request = ApiError::Status { status: 400, message: "Unable to log in".to_owned() };
    assert_eq!(sign_in_error(&bad_request), "Invalid credentials");
}

#[test]
fn network_failures_keep_their_message() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(sign_in_error(&err), err.user_message());
}

#[test]
fn other_failures_are_generic() {
    let err = ApiError::Status { status: 500, message: "boom".to_owned() };
    assert_eq!(sign_in_error(&err), "Something went wrong");
}
