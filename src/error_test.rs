use super::*;

#[test]
fn upstream_failures_map_to_bad_gateway() {
    assert_eq!(HostError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn oversized_bodies_map_to_413() {
    assert_eq!(HostError::Body("too big".into()).status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[test]
fn local_failures_map_to_500() {
    assert_eq!(HostError::Config("PORT".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    let io = HostError::from(std::io::Error::other("disk"));
    assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn into_response_carries_status() {
    let resp = HostError::Upstream("timeout".into()).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
