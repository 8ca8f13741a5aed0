#![allow(clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, unreachable_pub)]
use axum::http::StatusCode;
mod common;

#[tokio::test]
async fn test_lists_message_groups_most_recent_first() {
    let store = common::FakeStore {
        items: vec![
            common::group_item("2023-01-02T00:00:00Z", "A", "Bob", "bob", "hi"),
            common::group_item("2023-01-01T00:00:00Z", "B", "Alice", "alice", "hello"),
        ],
        ..common::FakeStore::default()
    };
    let app = common::TestApp::spawn(store).await;

    let resp = app.client.get(format!("{}/api/message_groups/u-123", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!([
            {"uuid": "A", "display_name": "Bob", "handle": "bob", "message": "hi", "created_at": "2023-01-02T00:00:00Z"},
            {"uuid": "B", "display_name": "Alice", "handle": "alice", "message": "hello", "created_at": "2023-01-01T00:00:00Z"},
        ])
    );

    let queries = app.store.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].table_name, "cruddur-messages");
    assert_eq!(queries[0].partition_key, "GRP#u-123");
    assert!(!queries[0].scan_index_forward);
    assert_eq!(queries[0].limit, 20);
}

#[tokio::test]
async fn test_empty_partition_returns_empty_array() {
    let app = common::TestApp::spawn(common::FakeStore::default()).await;

    let resp = app.client.get(format!("{}/api/message_groups/nobody", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_malformed_record_is_server_error() {
    let mut item = common::group_item("2023-01-02T00:00:00Z", "A", "Bob", "bob", "hi");
    item.remove("user_display_name");
    let app = common::TestApp::spawn(common::FakeStore { items: vec![item], ..common::FakeStore::default() }).await;

    let resp = app.client.get(format!("{}/api/message_groups/u-123", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn test_store_failure_is_server_error() {
    let app = common::TestApp::spawn(common::FakeStore { fail: true, ..common::FakeStore::default() }).await;

    let resp = app.client.get(format!("{}/api/message_groups/u-123", app.server_url)).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
