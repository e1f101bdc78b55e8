mod common;

use common::{ndjson_body, ndjson_line, MockServer, Route};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;
use travel_refinery::config::{DestinationConfig, LlmConfig};
use travel_refinery::llm::{LlmError, LlmFormatter};
use travel_refinery::ops::probe_with_timeout;
use travel_refinery::persistence::{read_json, write_json, CleanedDocument, StoreError};

// * Test Suite for the LLM formatting stage against a local streaming endpoint

const NDJSON: &str = "application/x-ndjson";

fn final_json() -> Value {
    json!({
        "name": "Bikaner",
        "state": "Rajasthan",
        "details": {
            "history": "Founded in 1488 by Rao Bika.",
            "bestTime": "October to March",
            "crowd": null
        }
    })
}

fn template() -> Value {
    json!({
        "name": "Jaipur",
        "state": "Rajasthan",
        "images": ["https://example.org/jaipur.jpg"],
        "details": {"history": "Pink city", "bestTime": "Winter", "crowd": "High"}
    })
}

fn cleaned(full_description: &str, summary: &str) -> CleanedDocument {
    CleanedDocument {
        destination: "Bikaner".to_string(),
        state: "Rajasthan".to_string(),
        summary: summary.to_string(),
        full_description: full_description.to_string(),
        attractions: vec!["Junagarh Fort".to_string()],
        sources: vec![Some("https://example.org/bikaner".to_string())],
    }
}

fn config(endpoint: String) -> LlmConfig {
    LlmConfig {
        echo_stream: false,
        ..LlmConfig::default()
    }
    .with_endpoint_override(Some(endpoint))
}

fn formatter(endpoint: String) -> LlmFormatter {
    LlmFormatter::new(config(endpoint), DestinationConfig::default()).unwrap()
}

struct Files {
    _dir: tempfile::TempDir,
    input: PathBuf,
    template: PathBuf,
    output: PathBuf,
}

fn files(doc: &CleanedDocument) -> Files {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bikaner_clean.json");
    let template_path = dir.path().join("schema_template.json");
    write_json(&input, doc).unwrap();
    write_json(&template_path, &template()).unwrap();
    Files {
        output: dir.path().join("bikaner_final.json"),
        input,
        template: template_path,
        _dir: dir,
    }
}

fn run_paths(f: &Files) -> (&Path, &Path, &Path) {
    (&f.input, &f.template, &f.output)
}

#[tokio::test]
async fn test_fenced_stream_is_parsed_and_saved() {
    let fenced = format!("```json\n{}\n```", serde_json::to_string_pretty(&final_json()).unwrap());
    let server = MockServer::single("/api/chat", Route::new(200, NDJSON, ndjson_body(&fenced, 7))).await;
    let f = files(&cleaned("Bikaner was founded in 1488.", "Founded 1488."));
    let (input, template_path, output) = run_paths(&f);

    let result = formatter(server.url("/api/chat"))
        .run(input, template_path, output)
        .await
        .unwrap();

    assert_eq!(result, final_json());
    let saved: Value = read_json(output).unwrap();
    assert_eq!(saved, final_json());
    assert!(std::fs::read_to_string(output).unwrap().contains("\n    \"details\": {\n        \""));
}

#[tokio::test]
async fn test_request_body_shape() {
    let server = MockServer::single(
        "/api/chat",
        Route::new(200, NDJSON, ndjson_body(&final_json().to_string(), 50)),
    )
    .await;
    let f = files(&cleaned("Bikaner was founded in 1488.", ""));
    let (input, template_path, output) = run_paths(&f);

    formatter(server.url("/api/chat"))
        .run(input, template_path, output)
        .await
        .unwrap();

    let bodies = server.request_bodies();
    assert_eq!(bodies.len(), 1);
    let request: Value = serde_json::from_str(&bodies[0]).unwrap();

    assert_eq!(request["model"], json!("llama3.1"));
    assert_eq!(request["stream"], json!(true));
    assert_eq!(request["options"]["num_ctx"], json!(40000));
    assert!((request["options"]["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);

    let messages = request["messages"].as_array().unwrap();
    assert_eq!(messages[0]["role"], json!("system"));
    assert_eq!(messages[1]["role"], json!("user"));
    let user = messages[1]["content"].as_str().unwrap();
    assert!(user.contains("Bikaner was founded in 1488."));
    assert!(user.contains(&serde_json::to_string_pretty(&template()).unwrap()));
}

#[tokio::test]
async fn test_malformed_chunks_skipped() {
    let mut body = String::from("not json at all\n");
    body.push_str(&ndjson_line("{\"name\": ", false));
    body.push_str("{\"message\": \n");
    body.push_str(&ndjson_line("\"Bikaner\"}", false));
    body.push_str(&ndjson_line("", true));
    let server = MockServer::single("/api/chat", Route::new(200, NDJSON, body)).await;

    let value = formatter(server.url("/api/chat"))
        .format(&cleaned("Some context.", ""), &template())
        .await
        .unwrap();

    assert_eq!(value, json!({"name": "Bikaner"}));
}

#[tokio::test]
async fn test_unparseable_output_fails_without_saving() {
    let server = MockServer::single(
        "/api/chat",
        Route::new(200, NDJSON, ndjson_body("Here is your JSON: {name: Bikaner", 5)),
    )
    .await;
    let f = files(&cleaned("Some context.", ""));
    let (input, template_path, output) = run_paths(&f);

    let err = formatter(server.url("/api/chat"))
        .run(input, template_path, output)
        .await
        .unwrap_err();

    match err {
        LlmError::MalformedOutput { preview, .. } => assert!(preview.starts_with("Here is your JSON")),
        other => panic!("expected malformed output, got {other:?}"),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn test_connection_refused() {
    // * Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = formatter(format!("http://{addr}/api/chat"))
        .format(&cleaned("Some context.", ""), &template())
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::Connection { .. }));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::single(
        "/api/chat",
        Route::new(500, "application/json", r#"{"error":"model not found"}"#),
    )
    .await;

    let err = formatter(server.url("/api/chat"))
        .format(&cleaned("Some context.", ""), &template())
        .await
        .unwrap_err();

    match err {
        LlmError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("model not found"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_response_fails() {
    let server = MockServer::single("/api/chat", Route::new(200, NDJSON, ndjson_line("", true))).await;

    let err = formatter(server.url("/api/chat"))
        .format(&cleaned("Some context.", ""), &template())
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn test_summary_used_when_description_empty() {
    let server = MockServer::single(
        "/api/chat",
        Route::new(200, NDJSON, ndjson_body(&final_json().to_string(), 40)),
    )
    .await;

    formatter(server.url("/api/chat"))
        .format(&cleaned("", "Bikaner is famous for camels."), &template())
        .await
        .unwrap();

    let request: Value = serde_json::from_str(&server.request_bodies()[0]).unwrap();
    let user = request["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("TEXT TO EXTRACT FROM:\nBikaner is famous for camels."));
}

#[tokio::test]
async fn test_empty_context_never_calls_endpoint() {
    let server = MockServer::start(vec![]).await;

    let err = formatter(server.url("/api/chat"))
        .format(&cleaned("", "  "), &template())
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::EmptyContext));
    assert!(server.request_bodies().is_empty());
}

#[tokio::test]
async fn test_missing_inputs() {
    let f = files(&cleaned("Some context.", ""));
    let absent = f.input.with_file_name("absent.json");
    let fmt = formatter("http://127.0.0.1:9/api/chat".to_string());

    let err = fmt.run(&absent, &f.template, &f.output).await.unwrap_err();
    assert!(matches!(err, LlmError::Input(StoreError::NotFound(_))));

    let err = fmt.run(&f.input, &absent, &f.output).await.unwrap_err();
    assert!(matches!(err, LlmError::Template(StoreError::NotFound(_))));
    assert!(!f.output.exists());
}

#[tokio::test]
async fn test_probe_streams_reply() {
    let server = MockServer::single(
        "/api/chat",
        Route::new(200, NDJSON, ndjson_body("Hello, connection is working!", 6)),
    )
    .await;

    let reply = probe_with_timeout(&config(server.url("/api/chat")), Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(reply, "Hello, connection is working!");

    let request: Value = serde_json::from_str(&server.request_bodies()[0]).unwrap();
    assert!(request.get("options").is_none());
    assert_eq!(request["messages"].as_array().unwrap().len(), 1);
}
