use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use cloud_stream_queue::config::{AppConfig, AppState};
use cloud_stream_queue::queue::JobQueue;
use cloud_stream_queue::routes::create_router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        app_name: "cloud-stream-queue".to_string(),
        app_version: "0.0.0".to_string(),
    };

    create_router(AppState::new(JobQueue::new(), config))
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    let req = match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

async fn enqueue(app: &Router, job_type: &str) -> u64 {
    let (status, body) = request(
        app,
        "POST",
        "/jobs/enqueue",
        Some(json!({ "type": job_type })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    body["data"]["id"].as_u64().unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = test_app();

    let (status, body) = request(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn enqueue_assigns_increasing_ids() {
    let app = test_app();

    assert_eq!(enqueue(&app, "TIME_CRITICAL").await, 1);
    assert_eq!(enqueue(&app, "NOT_TIME_CRITICAL").await, 2);
    assert_eq!(enqueue(&app, "TIME_CRITICAL").await, 3);
}

#[tokio::test]
async fn enqueue_rejects_unknown_type() {
    let app = test_app();

    let (status, body) = request(
        &app,
        "POST",
        "/jobs/enqueue",
        Some(json!({ "type": "SOMEWHAT_CRITICAL" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "INVALID_JOB_TYPE");

    // The rejected job left no trace: the next id is still 1.
    assert_eq!(enqueue(&app, "TIME_CRITICAL").await, 1);
}

#[tokio::test]
async fn enqueue_rejects_empty_type() {
    let app = test_app();

    let (status, body) = request(&app, "POST", "/jobs/enqueue", Some(json!({ "type": "" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn dequeue_prefers_critical_jobs() {
    let app = test_app();
    enqueue(&app, "NOT_TIME_CRITICAL").await;
    enqueue(&app, "TIME_CRITICAL").await;

    let (status, body) = request(&app, "GET", "/jobs/dequeue", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["job"]["id"], 2);
    assert_eq!(body["data"]["job"]["type"], "TIME_CRITICAL");
    assert_eq!(body["data"]["job"]["status"], "IN_PROGRESS");

    let (status, body) = request(&app, "GET", "/jobs/dequeue", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["job"]["id"], 1);

    let (status, body) = request(&app, "GET", "/jobs/dequeue", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NO_JOBS_AVAILABLE");
}

#[tokio::test]
async fn conclude_unknown_job_returns_not_found() {
    let app = test_app();

    let (status, body) = request(
        &app,
        "PATCH",
        "/jobs/42/conclude",
        Some(json!({ "result": "ok" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "JOB_NOT_FOUND");
}

#[tokio::test]
async fn conclude_finalizes_the_job() {
    let app = test_app();
    let id = enqueue(&app, "NOT_TIME_CRITICAL").await;
    request(&app, "GET", "/jobs/dequeue", None).await;

    let (status, body) = request(
        &app,
        "PATCH",
        &format!("/jobs/{}/conclude", id),
        Some(json!({ "result": "ok" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = request(&app, "GET", &format!("/jobs/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["job"]["status"], "CONCLUDED");
}

#[tokio::test]
async fn failed_conclude_spawns_a_retry() {
    let app = test_app();
    let id = enqueue(&app, "TIME_CRITICAL").await;
    request(&app, "GET", "/jobs/dequeue", None).await;

    let (status, _) = request(
        &app,
        "PATCH",
        &format!("/jobs/{}/conclude", id),
        Some(json!({ "result": "failed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Original is terminal, the retry waits under the next id.
    let (_, body) = request(&app, "GET", &format!("/jobs/{}", id), None).await;
    assert_eq!(body["data"]["job"]["status"], "CONCLUDED");

    let (status, body) = request(&app, "GET", "/jobs/dequeue", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["job"]["id"], 2);
    assert_eq!(body["data"]["job"]["type"], "TIME_CRITICAL");
    assert_eq!(body["data"]["job"]["attempts"], 1);
}

#[tokio::test]
async fn get_job_returns_not_found_for_unknown_id() {
    let app = test_app();

    let (status, body) = request(&app, "GET", "/jobs/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "JOB_NOT_FOUND");
}

#[tokio::test]
async fn debug_returns_empty_buckets_for_a_fresh_queue() {
    let app = test_app();

    let (status, body) = request(&app, "GET", "/jobs/debug", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["queued"], json!([]));
    assert_eq!(body["data"]["in_progress"], json!([]));
    assert_eq!(body["data"]["concluded"], json!([]));
}

#[tokio::test]
async fn debug_partitions_jobs_by_status() {
    let app = test_app();
    let first = enqueue(&app, "TIME_CRITICAL").await;
    enqueue(&app, "NOT_TIME_CRITICAL").await;
    enqueue(&app, "NOT_TIME_CRITICAL").await;

    request(&app, "GET", "/jobs/dequeue", None).await;
    let (_, body) = request(&app, "GET", "/jobs/debug", None).await;
    assert_eq!(body["data"]["queued"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["in_progress"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["concluded"], json!([]));

    request(
        &app,
        "PATCH",
        &format!("/jobs/{}/conclude", first),
        Some(json!({ "result": "ok" })),
    )
    .await;
    let (_, body) = request(&app, "GET", "/jobs/debug", None).await;
    assert_eq!(body["data"]["in_progress"], json!([]));
    assert_eq!(body["data"]["concluded"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["concluded"][0]["id"], 1);
}

#[tokio::test]
async fn malformed_json_is_rejected_before_the_core() {
    let app = test_app();

    let res = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/jobs/enqueue")
                .header("content-type", "application/json")
                .body(Body::from("{\"type\":\"TIME_CRITICAL\""))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_integer_job_id_is_rejected() {
    let app = test_app();

    let (status, _) = request(&app, "GET", "/jobs/not-a-number", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
