use rag_chat::api::{RagClient, Reply};
use rag_chat::config::Config;
use rag_chat::error::RagChatError;
use rag_chat::ui::render;
use serde_json::json;
use std::net::TcpListener;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOOLS_CALL: &str = "/api/v2/mcp/tools/call";

fn config_for(base_url: &str) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        tool_name: "generate_rag_answer".to_string(),
        session_id: "cli-tester".to_string(),
        include_sources: true,
        verbose: false,
    }
}

fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[test]
fn test_build_request_uses_config_session() {
    let config = config_for("http://localhost:8000");
    let client = RagClient::new(&config).unwrap();

    let request = client.build_request("¿Qué es el tracking?", None);
    assert_eq!(request.tool_name, "generate_rag_answer");
    assert_eq!(request.arguments.query, "¿Qué es el tracking?");
    assert!(request.arguments.include_sources);
    assert_eq!(request.session_id, "cli-tester");

    let request = client.build_request("hola", Some("override"));
    assert_eq!(request.session_id, "override");
}

#[test]
fn test_request_serializes_to_wire_shape() {
    let config = config_for("http://localhost:8000");
    let client = RagClient::new(&config).unwrap();

    let value = serde_json::to_value(client.build_request("hola", None)).unwrap();
    assert_eq!(
        value,
        json!({
            "tool_name": "generate_rag_answer",
            "arguments": {"query": "hola", "include_sources": true},
            "session_id": "cli-tester"
        })
    );
}

#[tokio::test]
async fn test_ask_posts_payload_and_returns_body() {
    let server = MockServer::start().await;
    let body = json!({"content": [{"text": "Envía tu paquete en 24h", "sources": ["faq#3"]}]});

    Mock::given(method("POST"))
        .and(path(TOOLS_CALL))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "tool_name": "generate_rag_answer",
            "arguments": {"query": "¿Cómo hago un envío?", "include_sources": true},
            "session_id": "cli-tester"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri());
    let client = RagClient::new(&config).unwrap();

    let response = client.ask("¿Cómo hago un envío?", None).await.unwrap();
    assert_eq!(response, body);
}

#[tokio::test]
async fn test_ask_forwards_session_override() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOOLS_CALL))
        .and(body_json(json!({
            "tool_name": "generate_rag_answer",
            "arguments": {"query": "hola", "include_sources": true},
            "session_id": "my-session"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server.uri());
    let client = RagClient::new(&config).unwrap();

    let response = client.ask("hola", Some("my-session")).await.unwrap();
    assert_eq!(response, json!({"ok": true}));
}

#[tokio::test]
async fn test_ask_reports_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOOLS_CALL))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let config = config_for(&server.uri());
    let client = RagClient::new(&config).unwrap();

    let err = client.ask("hola", None).await.unwrap_err();
    assert!(matches!(err, RagChatError::Status { status: 500, .. }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_ask_reports_invalid_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOOLS_CALL))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let config = config_for(&server.uri());
    let client = RagClient::new(&config).unwrap();

    let err = client.ask("hola", None).await.unwrap_err();
    assert!(matches!(err, RagChatError::InvalidJson(_)));
}

#[tokio::test]
async fn test_ask_reports_connection_failure() {
    let config = config_for(&unreachable_base_url());
    let client = RagClient::new(&config).unwrap();

    let err = client.ask("hola", None).await.unwrap_err();
    assert!(matches!(err, RagChatError::Connect { .. }));

    let message = err.to_string();
    assert!(message.contains("no se pudo conectar"));
    assert!(message.contains(client.endpoint()));
}

#[test]
fn test_default_timeout_is_thirty_seconds() {
    let config = config_for("http://localhost:8000");
    let client = RagClient::new(&config).unwrap();

    assert_eq!(client.timeout(), Duration::from_secs(30));
}

#[tokio::test]
async fn test_ask_reports_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TOOLS_CALL))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"content": [{"text": "tarde"}]}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server.uri());
    let client = RagClient::with_timeout(&config, Duration::from_secs(1)).unwrap();

    let result = client.ask("hola", None).await;
    assert!(matches!(
        result,
        Err(RagChatError::Timeout { secs: 1, .. })
    ));

    let mut out = Vec::new();
    render(&mut out, &Reply::from_result(&result, true), true).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Error: tiempo de espera agotado tras 1s"));
}

#[test]
fn test_timeout_message_names_limit() {
    let err = RagChatError::Timeout {
        url: "http://localhost:8000/api/v2/mcp/tools/call".to_string(),
        secs: 30,
    };

    assert_eq!(
        err.to_string(),
        "tiempo de espera agotado tras 30s (http://localhost:8000/api/v2/mcp/tools/call)"
    );
}
