use super::*;

#[test]
fn from_status_maps_auth_failures() {
    assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized(String::new()));
    assert_eq!(
        ApiError::from_status(403, "{\"detail\":\"Invalid token.\"}"),
        ApiError::Unauthorized("Invalid token.".to_owned())
    );
}

#[test]
fn unauthorized_shows_backend_message_when_present() {
    let err = ApiError::from_status(401, r#"{"error": "You are not in a customer session"}"#);
    assert_eq!(err.user_message(), "You are not in a customer session");
    assert_eq!(
        ApiError::from_status(401, "").user_message(),
        "You are not authorized. Please sign in again."
    );
}

#[test]
fn from_status_extracts_conflict_message() {
    let err = ApiError::from_status(
        409,
        r#"{"Conflict": "Your input table number is currently in use."}"#,
    );
    assert_eq!(err, ApiError::Conflict("Your input table number is currently in use.".to_owned()));
}

#[test]
fn from_status_prefers_error_key() {
    let err = ApiError::from_status(400, r#"{"error": "Table is occupied"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: "Table is occupied".to_owned() });
    assert_eq!(err.user_message(), "Table is occupied");
}

#[test]
fn from_status_formats_field_errors() {
    let err = ApiError::from_status(400, r#"{"name": ["This field may not be blank."]}"#);
    assert_eq!(err.user_message(), "name: This field may not be blank.");
}

#[test]
fn from_status_keeps_plain_text_body() {
    let err = ApiError::from_status(500, "  boom  ");
    assert_eq!(err, ApiError::Status { status: 500, message: "boom".to_owned() });
}

#[test]
fn user_message_falls_back_for_empty_bodies() {
    assert_eq!(ApiError::from_status(404, "").user_message(), "Not found.");
    assert_eq!(ApiError::from_status(502, "").user_message(), "Something went wrong (502).");
}

#[test]
fn display_includes_status_for_generic_failures() {
    let err = ApiError::Status { status: 418, message: "teapot".to_owned() };
    assert_eq!(err.to_string(), "request failed (418): teapot");
}
