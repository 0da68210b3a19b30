use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("QUENIFY_BACKEND_URL", "https://api.example.test/"),
        ("QUENIFY_PROXY_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.test");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(5));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", " "), ("QUENIFY_BACKEND_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, HostError::Config(msg) if msg.contains("PORT")));
}

#[test]
fn non_http_backend_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("QUENIFY_BACKEND_URL", "localhost:8000")])).unwrap_err();
    assert!(matches!(err, HostError::Config(_)));
}

#[test]
fn zero_timeout_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("QUENIFY_PROXY_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, HostError::Config(msg) if msg.contains("positive")));
}
