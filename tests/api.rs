use axum::http::StatusCode;
use axum::body::Body;
use async_trait::async_trait;
use http_body_util::BodyExt;
use tower::ServiceExt;
use serde_json::Value;
use cpfuzz::api::{build_router, AppState};
use cpfuzz::probe::{ProbeStatus, Prober};
use cpfuzz::reporting::ResultReporter;
use cpfuzz::wordlist::Wordlist;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tempfile::TempDir;

/// Records every locator it is asked to probe and answers 404 for all of them.
#[derive(Default)]
struct RecordingProber {
    seen: Mutex<Vec<String>>,
}

impl RecordingProber {
    fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl Prober for RecordingProber {
    async fn probe(&self, locator: &str) -> ProbeStatus {
        self.seen.lock().unwrap().push(locator.to_string());
        if locator.ends_with("/offline") {
            ProbeStatus::Failed("connection refused".into())
        } else {
            ProbeStatus::Code(404)
        }
    }
}

/// Answers 200 after a fixed delay, long enough to overlap other runs.
struct SlowProber {
    delay: Duration,
}

#[async_trait]
impl Prober for SlowProber {
    async fn probe(&self, _locator: &str) -> ProbeStatus {
        tokio::time::sleep(self.delay).await;
        ProbeStatus::Code(200)
    }
}

fn slow_state(dir: &TempDir, words: &[&str], delay: Duration) -> AppState {
    AppState::new(
        words.iter().copied().collect::<Wordlist>(),
        Arc::new(SlowProber { delay }),
        ResultReporter::new(dir.path().join("fuzzing_results.txt")),
    )
}

struct Harness {
    state: AppState,
    prober: Arc<RecordingProber>,
    _dir: TempDir,
}

fn create_test_state(words: &[&str]) -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let prober = Arc::new(RecordingProber::default());
    let state = AppState::new(
        words.iter().copied().collect::<Wordlist>(),
        prober.clone(),
        ResultReporter::new(dir.path().join("fuzzing_results.txt")),
    );
    Harness { state, prober, _dir: dir }
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn get(uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_text(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let text = response_text(response).await;
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, text))
}

#[tokio::test]
async fn test_missing_authority_is_rejected_without_probing() {
    let harness = create_test_state(&["a", "b"]);
    let response = app(&harness.state).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_text(response).await, "Missing authority parameter.");
    assert_eq!(harness.prober.count(), 0);
    assert!(!harness.state.reporter.path().exists());
}

#[tokio::test]
async fn test_empty_authority_is_rejected() {
    let harness = create_test_state(&["a"]);
    let response = app(&harness.state).oneshot(get("/?authority=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(harness.prober.count(), 0);
}

#[tokio::test]
async fn test_trigger_probes_every_candidate_and_writes_report() {
    let harness = create_test_state(&["a", "b"]);
    let response = app(&harness.state).oneshot(get("/?authority=foo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_text(response).await;
    assert!(body.starts_with("Fuzzing completed. Results saved to "));
    assert!(body.contains("fuzzing_results.txt"));

    let mut seen = harness.prober.seen.lock().unwrap().clone();
    seen.sort();
    assert_eq!(seen, vec!["content://foo/a", "content://foo/b"]);

    let report = std::fs::read_to_string(harness.state.reporter.path()).unwrap();
    assert_eq!(
        report,
        "Path: content://foo/a - Status: 404\nPath: content://foo/b - Status: 404\n"
    );
    assert!(harness.state.active_runs.is_empty());
}

#[tokio::test]
async fn test_probe_failures_are_reported_as_text() {
    let harness = create_test_state(&["offline", "users"]);
    let response = app(&harness.state)
        .oneshot(get("/?authority=com.example.provider"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report = std::fs::read_to_string(harness.state.reporter.path()).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines, vec![
        "Path: content://com.example.provider/offline - Status: connection refused",
        "Path: content://com.example.provider/users - Status: 404",
    ]);
}

#[tokio::test]
async fn test_second_run_overwrites_report() {
    let harness = create_test_state(&["x"]);
    app(&harness.state).oneshot(get("/?authority=first")).await.unwrap();
    app(&harness.state).oneshot(get("/?authority=second")).await.unwrap();

    let report = std::fs::read_to_string(harness.state.reporter.path()).unwrap();
    assert_eq!(report, "Path: content://second/x - Status: 404\n");
}

#[tokio::test]
async fn test_empty_wordlist_completes_with_empty_report() {
    let harness = create_test_state(&[]);
    let response = app(&harness.state).oneshot(get("/?authority=foo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(std::fs::read_to_string(harness.state.reporter.path()).unwrap(), "");
}

#[tokio::test]
async fn test_unusable_locator_is_server_error() {
    let harness = create_test_state(&["a"]);
    // A space in the authority makes the base locator unparseable.
    let response = app(&harness.state).oneshot(get("/?authority=bad%20host")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response_text(response).await.starts_with("Error during fuzzing: "));
    assert_eq!(harness.prober.count(), 0);
    assert!(harness.state.active_runs.is_empty());
}

#[tokio::test]
async fn test_unwritable_report_is_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let prober = Arc::new(RecordingProber::default());
    let state = AppState::new(
        ["a"].into_iter().collect::<Wordlist>(),
        prober.clone(),
        ResultReporter::new(dir.path()),
    );

    let response = app(&state).oneshot(get("/?authority=foo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(prober.count(), 1);
}

#[tokio::test]
async fn test_health_endpoint() {
    let harness = create_test_state(&[]);
    let response = app(&harness.state).oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "cpfuzz");
}

#[tokio::test]
async fn test_runs_endpoint_lists_in_flight_runs() {
    let harness = create_test_state(&[]);
    harness.state.active_runs.insert(
        "run-1".to_string(),
        cpfuzz::api::ActiveRun {
            authority: "com.example".to_string(),
            started_at: chrono::Utc::now(),
        },
    );

    let response = app(&harness.state).oneshot(get("/api/runs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["runs"][0]["id"], "run-1");
    assert_eq!(body["runs"][0]["authority"], "com.example");
}

#[tokio::test]
async fn test_concurrent_runs_both_complete_last_writer_wins() {
    let dir = tempfile::tempdir().unwrap();
    let state = slow_state(&dir, &["a", "b"], Duration::from_millis(100));

    let (first, second) = tokio::join!(
        app(&state).oneshot(get("/?authority=first")),
        app(&state).oneshot(get("/?authority=second")),
    );
    assert_eq!(first.unwrap().status(), StatusCode::OK);
    assert_eq!(second.unwrap().status(), StatusCode::OK);

    let report = std::fs::read_to_string(state.reporter.path()).unwrap();
    let from_first = "Path: content://first/a - Status: 200\nPath: content://first/b - Status: 200\n";
    let from_second = "Path: content://second/a - Status: 200\nPath: content://second/b - Status: 200\n";
    assert!(
        report == from_first || report == from_second,
        "report mixes runs: {:?}",
        report
    );
    assert!(state.active_runs.is_empty());
}

#[tokio::test]
async fn test_client_disconnect_does_not_cancel_run() {
    let dir = tempfile::tempdir().unwrap();
    let state = slow_state(&dir, &["a"], Duration::from_millis(300));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(&state);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /?authority=foo HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(state.active_runs.len(), 1);
    drop(stream);

    let mut waited = Duration::ZERO;
    while !state.active_runs.is_empty() && waited < Duration::from_secs(3) {
        tokio::time::sleep(Duration::from_millis(25)).await;
        waited += Duration::from_millis(25);
    }

    assert!(state.active_runs.is_empty());
    let report = std::fs::read_to_string(state.reporter.path()).unwrap();
    assert_eq!(report, "Path: content://foo/a - Status: 200\n");
}
