use axum::http::HeaderValue;
use axum::http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, COOKIE, HOST, SET_COOKIE, TRANSFER_ENCODING};

use super::*;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    assert_eq!(
        upstream_url("http://localhost:8000", "/api/orders/?table_number=4"),
        "http://localhost:8000/api/orders/?table_number=4"
    );
}

#[test]
fn upstream_url_avoids_double_slashes() {
    assert_eq!(upstream_url("http://localhost:8000/", "/api/menu/"), "http://localhost:8000/api/menu/");
    assert_eq!(upstream_url("http://backend", "api/tables/"), "http://backend/api/tables/");
}

// =============================================================================
// forwardable_headers
// =============================================================================

#[test]
fn forwardable_headers_keeps_auth_cookies_and_content_type() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Token abc"));
    headers.insert(COOKIE, HeaderValue::from_static("sessionid=xyz"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let out = forwardable_headers(&headers);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Token abc");
    assert_eq!(out.get(COOKIE).unwrap(), "sessionid=xyz");
    assert_eq!(out.get(CONTENT_TYPE).unwrap(), "application/json");
}

#[test]
fn forwardable_headers_drops_hop_by_hop() {
    let mut headers = HeaderMap::new();
    headers.insert(HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    assert!(forwardable_headers(&headers).is_empty());
}

#[test]
fn forwardable_headers_drops_headers_named_in_connection() {
    let mut headers = HeaderMap::new();
    headers.insert(CONNECTION, HeaderValue::from_static("close, X-Trace-Hop"));
    headers.insert("x-trace-hop", HeaderValue::from_static("1"));
    headers.insert("x-request-id", HeaderValue::from_static("r-9"));

    let out = forwardable_headers(&headers);
    assert!(out.get("x-trace-hop").is_none());
    assert_eq!(out.get("x-request-id").unwrap(), "r-9");
}

#[test]
fn forwardable_headers_keeps_repeated_set_cookie() {
    let mut headers = HeaderMap::new();
    headers.append(SET_COOKIE, HeaderValue::from_static("sessionid=1; Path=/"));
    headers.append(SET_COOKIE, HeaderValue::from_static("csrftoken=2; Path=/"));

    assert_eq!(forwardable_headers(&headers).get_all(SET_COOKIE).iter().count(), 2);
}
