//! Wire-level tests for the reqwest executor against a local mock server.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{bearer_token, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notewell_client::{HttpExecutor, NoteStore, RequestExecutor};
use notewell_client::executor::ApiRequest;
use notewell_core::{Error, NoteFilter};

fn executor_for(server: &MockServer) -> HttpExecutor {
    HttpExecutor::with_config(server.uri(), None)
}

#[tokio::test]
async fn test_get_returns_parsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let executor = executor_for(&server);
    let body = executor.execute(ApiRequest::get("/labels")).await.unwrap();
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_query_parameters_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(query_param("search", "milk"))
        .and(query_param("isArchived", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let executor = executor_for(&server);
    let filter = NoteFilter {
        search: "milk".to_string(),
        ..Default::default()
    };
    executor
        .execute(ApiRequest::get("/notes").with_query(filter.to_query()))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_bearer_token_attached_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/labels"))
        .and(bearer_token("sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let executor = HttpExecutor::with_config(server.uri(), Some("sekrit".to_string()));
    executor.execute(ApiRequest::get("/labels")).await.unwrap();
}

#[tokio::test]
async fn test_json_body_sent_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/labels"))
        .and(header_exists("content-type"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"data": {"_id": "l1", "name": "work", "color": "#f00"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let executor = executor_for(&server);
    executor
        .execute(ApiRequest::post("/labels", json!({"name": "work", "color": "#f00"})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_payload_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/notes"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"error": "Title is too long"})),
        )
        .mount(&server)
        .await;

    let executor = executor_for(&server);
    let err = executor
        .execute(ApiRequest::post("/notes", json!({})))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Title is too long");
    assert_eq!(err.status(), Some(422));
}

#[tokio::test]
async fn test_non_json_error_body_yields_empty_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notes/n1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let executor = executor_for(&server);
    let err = executor
        .execute(ApiRequest::delete("/notes/n1"))
        .await
        .unwrap_err();
    match err {
        Error::Server { status, message } => {
            assert_eq!(status, 500);
            assert!(message.is_empty());
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_distinct_variant() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Token expired"})))
        .mount(&server)
        .await;

    let executor = executor_for(&server);
    let err = executor.execute(ApiRequest::get("/notes")).await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized));
}

#[tokio::test]
async fn test_empty_success_body_resolves_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/notes/n1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let executor = executor_for(&server);
    let body = executor
        .execute(ApiRequest::delete("/notes/n1"))
        .await
        .unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_note_store_load_end_to_end_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(query_param("isArchived", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{
            "_id": "n1",
            "title": "A",
            "description": "d",
            "color": "#ffffff",
            "labels": [],
            "isPinned": false,
            "isArchived": false
        }]})))
        .mount(&server)
        .await;

    let store = NoteStore::new(Arc::new(executor_for(&server)));
    store.load(NoteFilter::default()).await.unwrap();
    assert_eq!(store.notes().await.len(), 1);
}
