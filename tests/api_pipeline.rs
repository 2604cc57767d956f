//! Pipeline behavior against a mock bridge + backend.

use httpmock::prelude::*;
use serde_json::json;

use taskbridge::auth::TokenBridge;
use taskbridge::client::ApiClient;
use taskbridge::error::ClientError;
use taskbridge::model::types::{CreateTask, TaskStatus, UpdateTask};

const BRIDGE_PATH: &str = "/api/auth/token";

fn client_for(server: &MockServer) -> ApiClient {
    let http = reqwest::Client::new();
    let bridge = TokenBridge::new(http.clone(), server.url(BRIDGE_PATH));
    ApiClient::from_parts(http, server.base_url(), bridge)
}

fn mock_bridge<'a>(server: &'a MockServer, token: &str) -> httpmock::Mock<'a> {
    let token = token.to_string();
    server.mock(move |when, then| {
        when.method(GET).path(BRIDGE_PATH);
        then.status(200).json_body(json!({ "token": token }));
    })
}

fn task_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "status": "pending",
        "user_id": "u1",
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn bridge_401_is_unauthenticated_and_leaves_cache_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(BRIDGE_PATH);
        then.status(401).json_body(json!({ "error": "Not authenticated" }));
    });

    let client = client_for(&server);
    let err = client.bridge().fetch_token().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));
    assert!(!client.bridge().has_cached_token());
}

#[tokio::test]
async fn bridge_500_is_bridge_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(BRIDGE_PATH);
        then.status(500).json_body(json!({ "error": "Failed to generate token" }));
    });

    let client = client_for(&server);
    let err = client.bridge().fetch_token().await.unwrap_err();
    assert!(matches!(err, ClientError::BridgeUnavailable));
    assert!(!client.bridge().has_cached_token());
}

#[tokio::test]
async fn successful_bridge_populates_cache_and_is_not_refetched() {
    let server = MockServer::start();
    let bridge_mock = mock_bridge(&server, "jwt-1");

    let client = client_for(&server);
    let token = client.bridge().fetch_token().await.unwrap();
    assert_eq!(token, "jwt-1");
    assert!(client.bridge().has_cached_token());

    // Cached token is reused; no second bridge round trip.
    let again = client.bridge().bearer().await.unwrap();
    assert_eq!(again, "jwt-1");
    bridge_mock.assert_hits(1);
}

#[tokio::test]
async fn invalidate_forces_a_fresh_exchange() {
    let server = MockServer::start();
    let bridge_mock = mock_bridge(&server, "jwt-1");

    let client = client_for(&server);
    client.bridge().bearer().await.unwrap();
    client.bridge().invalidate();
    assert!(!client.bridge().has_cached_token());
    client.bridge().bearer().await.unwrap();
    bridge_mock.assert_hits(2);
}

#[tokio::test]
async fn list_converts_page_to_offset_and_attaches_bearer() {
    let server = MockServer::start();
    mock_bridge(&server, "jwt-1");
    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/tasks")
            .query_param("offset", "10")
            .query_param("limit", "10")
            .header("authorization", "Bearer jwt-1");
        then.status(200)
            .json_body(json!([task_json(11, "one"), task_json(12, "two")]));
    });

    let client = client_for(&server);
    let page = client.tasks().list(2, 10).await.unwrap();
    list_mock.assert();
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.tasks.len(), 2);
    // Backend sends no count; total is the returned page length.
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn create_and_get_round_trip() {
    let server = MockServer::start();
    mock_bridge(&server, "jwt-1");
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/tasks")
            .json_body(json!({ "title": "buy milk", "status": "in_progress" }));
        then.status(201).json_body(task_json(7, "buy milk"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/tasks/7");
        then.status(200).json_body(task_json(7, "buy milk"));
    });

    let client = client_for(&server);
    let created = client
        .tasks()
        .create(&CreateTask {
            title: "buy milk".to_string(),
            description: None,
            status: Some(TaskStatus::InProgress),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 7);

    let fetched = client.tasks().get(7).await.unwrap();
    assert_eq!(fetched.title, "buy milk");
}

#[tokio::test]
async fn update_sends_partial_body() {
    let server = MockServer::start();
    mock_bridge(&server, "jwt-1");
    let update_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/tasks/7")
            .json_body(json!({ "status": "completed" }));
        then.status(200).json_body(task_json(7, "buy milk"));
    });

    let client = client_for(&server);
    client
        .tasks()
        .update(
            7,
            &UpdateTask {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    update_mock.assert();
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let server = MockServer::start();
    mock_bridge(&server, "jwt-1");
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/tasks/7");
        then.status(204);
    });

    let client = client_for(&server);
    client.tasks().delete(7).await.unwrap();
    delete_mock.assert();
}

#[tokio::test]
async fn backend_detail_message_is_extracted() {
    let server = MockServer::start();
    mock_bridge(&server, "jwt-1");
    server.mock(|when, then| {
        when.method(GET).path("/api/tasks/99");
        then.status(404).json_body(json!({ "detail": "Task not found" }));
    });

    let client = client_for(&server);
    let err = client.tasks().get(99).await.unwrap_err();
    match err {
        ClientError::Backend { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Task not found");
        }
        other => panic!("expected backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_detail_synthesizes_message_from_status() {
    let server = MockServer::start();
    mock_bridge(&server, "jwt-1");
    server.mock(|when, then| {
        when.method(DELETE).path("/api/tasks/99");
        then.status(500).body("internal error");
    });

    let client = client_for(&server);
    let err = client.tasks().delete(99).await.unwrap_err();
    match err {
        ClientError::Backend { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "delete task failed: 500");
        }
        other => panic!("expected backend error, got {other:?}"),
    }
}
