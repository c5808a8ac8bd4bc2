mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_check() {
    let server = common::create_test_server(common::create_memory_state());

    let response = server.get("/api/healthz").await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
