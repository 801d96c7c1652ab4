#![allow(clippy::expect_used)]

mod common;

use std::time::Duration;

use serde_json::json;

use common::{analysis_body, closed_port_url, FakeServer, Reply};
use healthwatch::domain::ports::analyzer::{AnalysisError, LogAnalyzer};
use healthwatch::domain::value_objects::severity::Severity;
use healthwatch::domain::value_objects::status_label::StatusLabel;
use healthwatch::infrastructure::http::HttpAnalysisClient;

const TIMEOUT: Duration = Duration::from_secs(5);
const SAMPLE_LOGS: &str = "[2024-12-10] ERROR: Database connection timeout";

fn client(base_url: &str) -> HttpAnalysisClient {
    HttpAnalysisClient::new(base_url, TIMEOUT).expect("client")
}

#[tokio::test]
async fn posts_logs_as_json_and_parses_diagnosis() {
    let server = FakeServer::start(vec![Reply::json(
        200,
        analysis_body("HIGH", "Database connection failed"),
    )])
    .await;

    let check = client(&server.base_url)
        .analyze(SAMPLE_LOGS)
        .await
        .expect("analysis");

    assert_eq!(check.analysis.severity, Severity::High);
    assert_eq!(check.status_label(), StatusLabel::Alert);
    assert_eq!(check.analysis.error, "Database connection failed");
    assert_eq!(check.provider, "GROQ");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/analyze");
    assert_eq!(requests[0].json(), json!({ "logs": SAMPLE_LOGS }));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = FakeServer::start(vec![Reply::json(200, analysis_body("LOW", "none"))]).await;

    let check = client(&format!("{}/", server.base_url))
        .analyze(SAMPLE_LOGS)
        .await
        .expect("analysis");

    assert_eq!(check.status_label(), StatusLabel::Healthy);
    assert_eq!(server.requests()[0].path, "/analyze");
}

#[tokio::test]
async fn server_error_maps_to_http_error() {
    let server = FakeServer::start(vec![Reply::json(
        500,
        json!({ "detail": "Analysis failed: upstream" }),
    )])
    .await;

    let err = client(&server.base_url)
        .analyze(SAMPLE_LOGS)
        .await
        .expect_err("should fail");

    assert_eq!(err, AnalysisError::Http { status_code: 500 });
    assert_eq!(err.to_string(), "analysis service returned HTTP 500");
}

#[tokio::test]
async fn unparseable_body_is_a_transport_error() {
    let server = FakeServer::start(vec![Reply::raw(200, "<html>gateway</html>")]).await;

    let err = client(&server.base_url)
        .analyze(SAMPLE_LOGS)
        .await
        .expect_err("should fail");

    assert!(matches!(err, AnalysisError::Transport(_)));
}

#[tokio::test]
async fn body_without_analysis_is_a_transport_error() {
    let server = FakeServer::start(vec![Reply::json(
        200,
        json!({ "status": "error", "error": "model unavailable" }),
    )])
    .await;

    let client = client(&server.base_url);
    let err = client.analyze(SAMPLE_LOGS).await.expect_err("should fail");
    assert!(matches!(err, AnalysisError::Transport(_)));
}

#[tokio::test]
async fn raw_analysis_returns_body_verbatim() {
    let body = json!({ "analysis": { "severity": "SEVERE" }, "extra": [1, 2, 3] });
    let server = FakeServer::start(vec![Reply::json(200, body.clone())]).await;

    let value = client(&server.base_url)
        .analyze_raw(SAMPLE_LOGS)
        .await
        .expect("raw");

    assert_eq!(value, body);
}

#[tokio::test]
async fn unknown_severity_is_preserved() {
    let server = FakeServer::start(vec![Reply::json(200, analysis_body("SEVERE", "odd"))]).await;

    let check = client(&server.base_url)
        .analyze(SAMPLE_LOGS)
        .await
        .expect("analysis");

    assert_eq!(check.analysis.severity, Severity::Unknown("SEVERE".into()));
    assert_eq!(check.analysis.severity.to_string(), "UNKNOWN");
    assert_eq!(check.status_label(), StatusLabel::Alert);
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let url = closed_port_url().await;
    let err = client(&url)
        .analyze(SAMPLE_LOGS)
        .await
        .expect_err("should fail");
    assert!(matches!(err, AnalysisError::Transport(_)));
}

#[tokio::test]
async fn blank_logs_never_reach_the_network() {
    let server = FakeServer::start(vec![Reply::json(200, analysis_body("LOW", "none"))]).await;

    let err = client(&server.base_url)
        .analyze(" \n\t")
        .await
        .expect_err("should fail");

    assert!(matches!(err, AnalysisError::Validation(_)));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn fetches_generated_logs() {
    let server = FakeServer::start(vec![Reply::json(
        200,
        json!({ "logs": "[2024-12-10] WARN: disk 91%", "count": 1 }),
    )])
    .await;

    let logs = client(&server.base_url)
        .fetch_generated_logs()
        .await
        .expect("logs");

    assert_eq!(logs, "[2024-12-10] WARN: disk 91%");
    let requests = server.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/generate-logs");
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = FakeServer::start(vec![
        Reply::json(200, analysis_body("LOW", "none")).after(Duration::from_secs(3))
    ])
    .await;

    let client =
        HttpAnalysisClient::new(&server.base_url, Duration::from_millis(200)).expect("client");
    let err = client.analyze(SAMPLE_LOGS).await.expect_err("should time out");
    assert!(matches!(err, AnalysisError::Transport(_)));
}
