use axum::{response::IntoResponse, routing::post, Json, Router};
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;
use zenflow::errors::SubmitError;
use zenflow::models::SubmissionPayload;
use zenflow::{HttpScoringBackend, ScoringBackend};

#[derive(Debug, Deserialize)]
struct OptionView {
    value: i64,
    selected: bool,
}

#[derive(Debug, Deserialize)]
struct FormView {
    options: Vec<OptionView>,
    mood: String,
    screen_time_label: String,
    score_text: String,
    intervention_text: String,
    marker_left: String,
    category_text: String,
    result_visible: bool,
    error_visible: bool,
    error_text: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));
static SCORING: Lazy<String> = Lazy::new(spawn_scoring_mock);

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// Stand-in scoring service: score is `90 - mood`, and the intervention
/// tells whether screen time arrived as a number.
async fn mock_stress(Json(payload): Json<Value>) -> Json<Value> {
    let mood = payload["mood"].as_f64().unwrap_or(0.0);
    let intervention = if payload["screen_time"].is_number() {
        "Take a walk"
    } else {
        "No screen time"
    };
    Json(json!({ "stress_score": 90.0 - mood, "intervention": intervention }))
}

async fn mock_not_json() -> impl IntoResponse {
    "Internal Server Error"
}

/// Runs on its own thread so it outlives every per-test runtime.
fn spawn_scoring_mock() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind scoring mock");
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("mock runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            let app = Router::new()
                .route("/stress", post(mock_stress))
                .route("/broken", post(mock_not_json));
            axum::serve(listener, app).await.unwrap();
        });
    });

    format!("http://{addr}")
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/status")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(scoring_url: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_zenflow"))
        .env("PORT", port.to_string())
        .env("ZENFLOW_SCORING_URL", scoring_url)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = spawn_server(&format!("{}/stress", *SCORING)).await;
    #[cfg(unix)]
    cleanup::register(server.child.id());
    let server = Arc::new(server);
    *guard = Some(Arc::clone(&server));
    server
}

async fn check_in(base_url: &str, body: Value) -> FormView {
    Client::new()
        .post(format!("{base_url}/api/check-in"))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_status_reports_scoring_url() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let status: Value = Client::new()
        .get(format!("{}/api/status", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(status["message"], "ZenFlow check-in is running.");
    assert_eq!(status["scoring_url"], format!("{}/stress", *SCORING));
}

#[tokio::test]
async fn http_index_selects_neutral_mood() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let html = Client::new()
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"value="60" data-value="60" checked"#));
    assert!(html.contains(r#"class="result hidden""#));
}

#[tokio::test]
async fn http_check_in_shows_normal_stress() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let view = check_in(
        &server.base_url,
        json!({ "mood": "60", "screen_time": "5.5", "typing_speed": "40" }),
    )
    .await;

    assert_eq!(view.mood, "60");
    assert_eq!(view.screen_time_label, "5.5");
    assert_eq!(view.score_text, "30");
    assert_eq!(view.intervention_text, "Take a walk");
    assert_eq!(view.marker_left, "30%");
    assert_eq!(view.category_text, "Normal Stress — totally fine.");
    assert!(view.result_visible);
    assert!(!view.error_visible);
    let selected: Vec<_> = view.options.iter().filter(|o| o.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].value, 60);
}

#[tokio::test]
async fn http_check_in_shows_high_stress() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let view = check_in(
        &server.base_url,
        json!({ "mood": "10", "screen_time": "9", "typing_speed": "70" }),
    )
    .await;

    assert_eq!(view.score_text, "80");
    assert_eq!(view.category_text, "High Stress — consider resting soon.");
}

#[tokio::test]
async fn http_unparsed_screen_time_is_sent_as_null() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let view = check_in(
        &server.base_url,
        json!({ "mood": "60", "screen_time": "lots", "typing_speed": "40" }),
    )
    .await;

    assert_eq!(view.screen_time_label, "lots");
    assert_eq!(view.intervention_text, "No screen time");
    assert!(view.result_visible);
}

#[tokio::test]
async fn http_form_post_renders_result_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let html = Client::new()
        .post(format!("{}/check-in", server.base_url))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("mood=95&screen_time=2&typing_speed=60")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"value="95" data-value="95" checked"#));
    assert!(html.contains(r#"<div class="score" id="stress-score">-5</div>"#));
    assert!(html.contains("Low Stress — you’re doing great!"));
    assert!(html.contains(r#"<section id="result-card" class="result">"#));
}

#[tokio::test]
async fn http_form_post_keeps_unlisted_mood_in_hidden_field() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let html = Client::new()
        .post(format!("{}/check-in", server.base_url))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("mood=42&screen_time=3&typing_speed=50")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"<input type="hidden" id="mood" name="mood" value="42" />"#));
    assert!(html.contains(r#"<div class="score" id="stress-score">48</div>"#));
}

#[tokio::test]
async fn http_malformed_json_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let response = Client::new()
        .post(format!("{}/api/check-in", server.base_url))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn http_dashboard_serves_chart_data() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;

    let chart: Value = Client::new()
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(chart["labels"].as_array().unwrap().len(), 5);
    assert_eq!(chart["allocated"], json!([80, 90, 70, 85, 60]));
    assert_eq!(chart["actual"], json!([70, 95, 60, 75, 50]));

    let response = Client::new()
        .get(format!("{}/dashboard", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn http_unreachable_backend_shows_error() {
    let _guard = TEST_LOCK.lock().await;
    let dead_url = format!("http://127.0.0.1:{}/stress", pick_free_port());
    let server = spawn_server(&dead_url).await;

    let view = check_in(
        &server.base_url,
        json!({ "mood": "60", "screen_time": "5.5", "typing_speed": "40" }),
    )
    .await;

    assert!(view.error_visible);
    assert_eq!(view.error_text, "Backend not responding!");
    assert!(!view.result_visible);
}

#[tokio::test]
async fn client_decodes_score() {
    let backend = HttpScoringBackend::new(format!("{}/stress", *SCORING));
    let result = backend
        .score(&SubmissionPayload {
            mood: Some(60),
            screen_time: Some(5.5),
            typing_speed: Some(40),
        })
        .await
        .unwrap();

    assert_eq!(result.stress_score, 30.0);
    assert_eq!(result.intervention, "Take a walk");
}

#[tokio::test]
async fn client_rejects_non_json_body() {
    let backend = HttpScoringBackend::new(format!("{}/broken", *SCORING));
    let err = backend
        .score(&SubmissionPayload {
            mood: None,
            screen_time: None,
            typing_speed: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Decode(_)));
}
