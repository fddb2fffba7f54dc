use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use bagcheck_api::application::http::server::http_server::{router, state};
use bagcheck_api::args::{Args, LlmArgs, LogStoreArgs, ServerArgs};
use httpmock::prelude::*;
use serde_json::{Value, json};

fn test_args(llm_base_url: String, log_store: Option<(String, String)>) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        llm: LlmArgs {
            openrouter_api_key: "test-key".to_string(),
            openrouter_model: "test-model".to_string(),
            openrouter_base_url: llm_base_url,
        },
        log_store: LogStoreArgs {
            supabase_url: log_store.as_ref().map(|(url, _)| url.clone()),
            supabase_key: log_store.map(|(_, key)| key),
        },
    }
}

fn server_for(args: Args) -> TestServer {
    let state = state(Arc::new(args)).unwrap();
    let app = router(state).unwrap();
    TestServer::try_new(app).unwrap()
}

fn chat_completion_with(content: &str) -> Value {
    json!({
        "id": "gen-1",
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
}

#[tokio::test]
async fn returns_the_verdict_for_a_valid_model_reply() {
    let llm = MockServer::start();
    llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).json_body(chat_completion_with(
            r#"{"carry_on": true, "checked_bag": true, "description": "Laptops are allowed in both."}"#,
        ));
    });

    let server = server_for(test_args(llm.base_url(), None));
    let response = server
        .post("/check-item")
        .json(&json!({"item_name": "Laptop"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["carry_on"], json!(true));
    assert_eq!(body["checked_bag"], json!(true));
    assert_eq!(
        body["description"],
        json!("Laptops are allowed in both.")
    );
    assert_eq!(body.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn forbidden_item_comes_back_forbidden() {
    let llm = MockServer::start();
    llm.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .body_contains("Dynamite");
        then.status(200).json_body(chat_completion_with(
            r#"{"carry_on": false, "checked_bag": false, "description": "Explosives are strictly forbidden."}"#,
        ));
    });

    let server = server_for(test_args(llm.base_url(), None));
    let response = server
        .post("/check-item")
        .json(&json!({"item_name": "Dynamite"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["carry_on"], json!(false));
    assert_eq!(body["checked_bag"], json!(false));
    assert!(!body["description"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn non_json_model_reply_is_a_500_with_a_malformed_message() {
    let llm = MockServer::start();
    llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).json_body(chat_completion_with("not json"));
    });

    let server = server_for(test_args(llm.base_url(), None));
    let response = server
        .post("/check-item")
        .json(&json!({"item_name": "Laptop"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("malformed"));
}

#[tokio::test]
async fn model_reply_missing_fields_is_a_500_schema_error() {
    let llm = MockServer::start();
    llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .json_body(chat_completion_with(r#"{"carry_on": true}"#));
    });

    let server = server_for(test_args(llm.base_url(), None));
    let response = server
        .post("/check-item")
        .json(&json!({"item_name": "Laptop"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("expected shape"));
}

#[tokio::test]
async fn upstream_call_failure_is_a_500_with_the_upstream_message() {
    let llm = MockServer::start();
    llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(401).body("Invalid API key");
    });

    let server = server_for(test_args(llm.base_url(), None));
    let response = server
        .post("/check-item")
        .json(&json!({"item_name": "Laptop"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("401"));
}

#[tokio::test]
async fn empty_item_name_is_rejected_before_the_model_is_called() {
    let llm = MockServer::start();
    let mock = llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).json_body(chat_completion_with("{}"));
    });

    let server = server_for(test_args(llm.base_url(), None));
    let response = server
        .post("/check-item")
        .json(&json!({"item_name": ""}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    mock.assert_hits(0);
}

#[tokio::test]
async fn request_body_without_item_name_is_a_bad_request() {
    let llm = MockServer::start();
    let server = server_for(test_args(llm.base_url(), None));

    let response = server
        .post("/check-item")
        .json(&json!({"name": "Laptop"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn log_store_failure_does_not_change_the_response() {
    let llm = MockServer::start();
    llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).json_body(chat_completion_with(
            r#"{"carry_on": true, "checked_bag": true, "description": "Allowed in both."}"#,
        ));
    });

    let store = MockServer::start();
    let insert = store.mock(|when, then| {
        when.method(POST).path("/rest/v1/tsa_api_logs");
        then.status(503).body("service unavailable");
    });

    let server = server_for(test_args(
        llm.base_url(),
        Some((store.base_url(), "service-key".to_string())),
    ));
    let response = server
        .post("/check-item")
        .json(&json!({"item_name": "Laptop"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["carry_on"], json!(true));

    // The detached insert should still have been attempted.
    for _ in 0..100 {
        if insert.hits() > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    insert.assert();
}

#[tokio::test]
async fn successful_calls_are_recorded_with_client_metadata() {
    let llm = MockServer::start();
    llm.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).json_body(chat_completion_with(
            r#"{"carry_on": true, "checked_bag": true, "description": "Allowed in both."}"#,
        ));
    });

    let store = MockServer::start();
    let insert = store.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/tsa_api_logs")
            .header("apikey", "service-key")
            .json_body_partial(
                r#"{"item_name": "toothpaste", "carry_on": true, "user_agent": "test-agent/1.0", "ip_address": "203.0.113.7"}"#,
            );
        then.status(201);
    });

    let server = server_for(test_args(
        llm.base_url(),
        Some((store.base_url(), "service-key".to_string())),
    ));
    let response = server
        .post("/check-item")
        .add_header(
            HeaderName::from_static("user-agent"),
            HeaderValue::from_static("test-agent/1.0"),
        )
        .add_header(
            HeaderName::from_static("x-forwarded-for"),
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        )
        .json(&json!({"item_name": "toothpaste"}))
        .await;

    response.assert_status_ok();

    for _ in 0..100 {
        if insert.hits() > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    insert.assert();
}

#[tokio::test]
async fn the_root_route_welcomes_callers() {
    let llm = MockServer::start();
    let server = server_for(test_args(llm.base_url(), None));

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("Bagcheck"));
}
