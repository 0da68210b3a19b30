use super::*;
use crate::config::HostConfig;

fn test_state() -> AppState {
    let config = HostConfig::from_lookup(|key| (key == "QUENIFY_BACKEND_URL").then(|| "http://backend.test/".to_owned()))
        .unwrap();
    AppState::new(&config).unwrap()
}

#[tokio::test]
async fn healthz_reports_backend_origin() {
    let Json(health) = healthz(State(test_state())).await;
    assert_eq!(health, Health { status: "ok", backend: "http://backend.test".to_owned() });
}

#[test]
fn health_serializes_as_flat_json() {
    let value = serde_json::to_value(Health { status: "ok", backend: "http://b".to_owned() }).unwrap();
    assert_eq!(value, serde_json::json!({ "status": "ok", "backend": "http://b" }));
}
