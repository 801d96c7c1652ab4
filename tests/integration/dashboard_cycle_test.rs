#![allow(clippy::expect_used)]

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;

use common::{analysis_body, wait_until, FakeServer, Reply};
use healthwatch::application::services::dashboard::{CycleOutcome, DashboardController, Trigger};
use healthwatch::application::services::scheduler::PollScheduler;
use healthwatch::application::services::upload_relay::{UploadRelay, UploadedFile};
use healthwatch::domain::ports::analyzer::LogAnalyzer;
use healthwatch::domain::ports::notifier::{Notification, NotificationError, Notifier};
use healthwatch::domain::state::{CycleState, Phase};
use healthwatch::domain::value_objects::severity::Severity;
use healthwatch::domain::value_objects::status_label::StatusLabel;
use healthwatch::infrastructure::http::HttpAnalysisClient;
use healthwatch::infrastructure::logs::remote_source::RemoteLogSource;
use healthwatch::infrastructure::logs::static_source::StaticLogSource;

const SAMPLE_LOGS: &str = "[2024-12-10] ERROR: Database connection timeout";

// ---------------------------------------------------------------------------
// RecordingNotifier
// ---------------------------------------------------------------------------

#[derive(Default)]
struct RecordingNotifier {
    events: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn events(&self) -> Vec<String> {
        self.events.lock().expect("lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notification: &Notification) -> Result<(), NotificationError> {
        let event = match notification {
            Notification::Progress { title } => format!("progress:{title}"),
            Notification::Success { title, subtitle } => format!("success:{title}:{subtitle}"),
            Notification::Error { title, message } => format!("error:{title}:{message}"),
        };
        self.events.lock().expect("lock").push(event);
        Ok(())
    }

    fn dismiss(&self) -> Result<(), NotificationError> {
        self.events.lock().expect("lock").push("dismiss".into());
        Ok(())
    }
}

fn client(server: &FakeServer) -> Arc<HttpAnalysisClient> {
    Arc::new(HttpAnalysisClient::new(&server.base_url, Duration::from_secs(5)).expect("client"))
}

fn controller(
    client: &Arc<HttpAnalysisClient>,
    notifier: &Arc<RecordingNotifier>,
) -> Arc<DashboardController> {
    Arc::new(DashboardController::new(
        Arc::clone(client) as Arc<dyn LogAnalyzer>,
        Arc::new(StaticLogSource::new(SAMPLE_LOGS.into())),
        Arc::clone(notifier) as Arc<dyn Notifier>,
    ))
}

// ---------------------------------------------------------------------------
// Cycles against the fake service
// ---------------------------------------------------------------------------

#[tokio::test]
async fn successful_cycle_updates_dashboard_and_notifies() {
    let server = FakeServer::start(vec![Reply::json(
        200,
        analysis_body("HIGH", "Database connection failed"),
    )])
    .await;
    let notifier = Arc::new(RecordingNotifier::default());
    let dashboard = controller(&client(&server), &notifier);

    let outcome = dashboard.run_cycle(Trigger::Manual).await;
    assert!(matches!(outcome, CycleOutcome::Succeeded { cycle: 1, .. }));

    assert_eq!(server.requests()[0].json(), json!({ "logs": SAMPLE_LOGS }));

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.phase(), Phase::Success);
    assert!(!snapshot.loading());
    assert!(snapshot.error().is_none());
    let check = snapshot.last_check().expect("last check");
    assert_eq!(check.analysis.severity, Severity::High);
    assert_eq!(check.analysis.severity.to_string(), "HIGH");
    assert_eq!(check.status_label(), StatusLabel::Alert);

    assert_eq!(
        notifier.events(),
        vec![
            "progress:Analyzing logs...".to_string(),
            "dismiss".to_string(),
            "success:Analysis complete:HIGH".to_string(),
        ]
    );
}

#[tokio::test]
async fn failed_cycle_keeps_previous_diagnosis() {
    let server = FakeServer::start(vec![
        Reply::json(200, analysis_body("LOW", "Slow query detected")),
        Reply::json(500, json!({ "detail": "Analysis failed" })),
    ])
    .await;
    let notifier = Arc::new(RecordingNotifier::default());
    let dashboard = controller(&client(&server), &notifier);

    dashboard.run_cycle(Trigger::Timer).await;
    let outcome = dashboard.run_cycle(Trigger::Timer).await;
    assert!(matches!(outcome, CycleOutcome::Failed { cycle: 2, .. }));

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.phase(), Phase::Failure);
    assert!(snapshot.error().expect("error").contains("500"));
    let kept = snapshot.last_check().expect("previous check kept");
    assert_eq!(kept.analysis.error, "Slow query detected");
    assert_eq!(kept.status_label(), StatusLabel::Healthy);

    let events = notifier.events();
    let last = events.last().expect("events");
    assert!(last.starts_with("error:Analysis failed:"));
    assert!(last.contains("500"));
}

#[tokio::test]
async fn overlapping_trigger_is_dropped() {
    let server = FakeServer::start(vec![
        Reply::json(200, analysis_body("MEDIUM", "API timeout")).after(Duration::from_millis(300)),
        Reply::json(200, analysis_body("LOW", "unexpected second request")),
    ])
    .await;
    let notifier = Arc::new(RecordingNotifier::default());
    let dashboard = controller(&client(&server), &notifier);

    let first = tokio::spawn({
        let dashboard = Arc::clone(&dashboard);
        async move { dashboard.run_cycle(Trigger::Timer).await }
    });
    assert!(wait_until(Duration::from_secs(2), || dashboard.in_flight()).await);
    assert!(dashboard.snapshot().loading());

    assert_eq!(dashboard.run_cycle(Trigger::Manual).await, CycleOutcome::Skipped);

    let outcome = first.await.expect("join");
    assert!(matches!(outcome, CycleOutcome::Succeeded { cycle: 1, .. }));
    assert_eq!(server.requests().len(), 1);

    let check = dashboard.snapshot().last_check().cloned().expect("check");
    assert_eq!(check.analysis.error, "API timeout");
}

#[tokio::test]
async fn scheduler_polls_then_refreshes_on_demand() {
    let server = FakeServer::start(vec![
        Reply::json(200, analysis_body("CRITICAL", "Service outage")),
        Reply::json(200, analysis_body("LOW", "Recovered")),
    ])
    .await;
    let notifier = Arc::new(RecordingNotifier::default());
    let dashboard = controller(&client(&server), &notifier);

    let handle = PollScheduler::start(Arc::clone(&dashboard), Duration::from_secs(3600));
    assert!(
        wait_until(Duration::from_secs(3), || {
            dashboard.snapshot().last_check().is_some()
        })
        .await,
        "first tick fires immediately"
    );
    assert_eq!(
        dashboard.snapshot().last_check().expect("check").analysis.severity,
        Severity::Critical
    );

    assert!(handle.refresh());
    assert!(
        wait_until(Duration::from_secs(3), || {
            dashboard
                .snapshot()
                .last_check()
                .is_some_and(|c| c.analysis.error == "Recovered")
        })
        .await
    );
    handle.stop().await;

    assert_eq!(server.requests().len(), 2);
    assert!(matches!(dashboard.snapshot().state(), CycleState::Success(_)));
}

#[tokio::test]
async fn remote_log_source_feeds_the_analysis() {
    let generated = "[2024-12-10] CRITICAL: Payment gateway unreachable";
    let server = FakeServer::start(vec![
        Reply::json(200, json!({ "logs": generated })),
        Reply::json(200, analysis_body("CRITICAL", "Payment gateway unreachable")),
    ])
    .await;
    let client = client(&server);
    let notifier = Arc::new(RecordingNotifier::default());
    let dashboard = DashboardController::new(
        Arc::clone(&client) as Arc<dyn LogAnalyzer>,
        Arc::new(RemoteLogSource::new(Arc::clone(&client))),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    );

    let outcome = dashboard.run_cycle(Trigger::Manual).await;
    assert!(matches!(outcome, CycleOutcome::Succeeded { .. }));

    let requests = server.requests();
    assert_eq!(requests[0].path, "/generate-logs");
    assert_eq!(requests[1].path, "/analyze");
    assert_eq!(requests[1].json(), json!({ "logs": generated }));
}

// ---------------------------------------------------------------------------
// Upload relay against the fake service
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_relays_analysis_body() {
    let body = analysis_body("MEDIUM", "Disk almost full");
    let server = FakeServer::start(vec![Reply::json(200, body.clone())]).await;
    let relay = UploadRelay::new(client(&server));

    let response = relay
        .relay(Some(UploadedFile {
            name: "app.log".into(),
            content: b"WARN disk usage 91%".to_vec(),
        }))
        .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body, body);
    assert_eq!(server.requests()[0].json(), json!({ "logs": "WARN disk usage 91%" }));
}

#[tokio::test]
async fn upload_reports_upstream_failure() {
    let server = FakeServer::start(vec![Reply::json(502, json!({ "detail": "bad gateway" }))]).await;
    let relay = UploadRelay::new(client(&server));

    let response = relay
        .relay(Some(UploadedFile {
            name: "app.log".into(),
            content: b"ERROR boom".to_vec(),
        }))
        .await;

    assert_eq!(response.status, 500);
    assert_eq!(response.body["error"], "Upload failed");
    assert!(response.body["details"]
        .as_str()
        .expect("details")
        .contains("502"));
}

#[tokio::test]
async fn upload_without_file_never_calls_service() {
    let server = FakeServer::start(vec![Reply::json(200, analysis_body("LOW", "none"))]).await;
    let relay = UploadRelay::new(client(&server));

    let response = relay.relay(None).await;

    assert_eq!(response.status, 400);
    assert_eq!(response.body, json!({ "error": "No file uploaded" }));
    assert!(server.requests().is_empty());
}
