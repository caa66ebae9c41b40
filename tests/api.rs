use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use wiggle_my_mouse::{
    create_router,
    services::NoopPointer,
    state::{AppOptions, AppState},
};

fn app(slider: f64) -> Router {
    let options = AppOptions {
        port: 20554,
        host: "127.0.0.1".to_string(),
        slider,
        distance: 15.0,
        delay: Duration::from_millis(500),
    };
    let state = AppState::new(options, Arc::new(NoopPointer::new())).unwrap();
    create_router(Arc::new(state))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app(1.0);
    let (status, body) = call(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn slider_value_is_converted_to_seconds_on_start() {
    let app = app(1.0);

    let (status, body) = call(&app, "PUT", "/slider", Some(json!({ "value": 0.5 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["controls"]["slider_label"], "0.5");
    assert_eq!(body["status"], "stopped");

    let (status, body) = call(&app, "POST", "/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["controls"]["interval_seconds"], 30.0);

    let (_, status_body) = call(&app, "GET", "/status", None).await;
    assert_eq!(status_body["timer"]["active"], true);
    assert_eq!(status_body["timer"]["interval_seconds"], 30.0);
    assert_eq!(status_body["last_action"], "start");
}

#[tokio::test]
async fn start_and_stop_toggle_the_buttons() {
    let app = app(1.0);

    let (_, body) = call(&app, "POST", "/start", None).await;
    assert_eq!(body["controls"]["start_enabled"], false);
    assert_eq!(body["controls"]["stop_enabled"], true);

    let (_, body) = call(&app, "POST", "/stop", None).await;
    assert_eq!(body["controls"]["start_enabled"], true);
    assert_eq!(body["controls"]["stop_enabled"], false);

    let (_, status_body) = call(&app, "GET", "/status", None).await;
    assert_eq!(status_body["timer"]["active"], false);
}

#[tokio::test]
async fn stopping_twice_is_not_an_error() {
    let app = app(1.0);

    let (first, _) = call(&app, "POST", "/stop", None).await;
    let (second, body) = call(&app, "POST", "/stop", None).await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(body["status"], "stopped");
}

#[tokio::test]
async fn out_of_range_slider_is_rejected() {
    let app = app(2.0);

    let (status, body) = call(&app, "PUT", "/slider", Some(json!({ "value": 0.0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["controls"]["slider"], 2.0);
}

#[tokio::test]
async fn start_is_refused_while_running() {
    let app = app(1.0);

    let (status, _) = call(&app, "POST", "/start", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, "POST", "/start", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");
    assert_eq!(body["controls"]["start_enabled"], false);
    assert_eq!(body["controls"]["stop_enabled"], true);

    call(&app, "POST", "/stop", None).await;
    let (status, body) = call(&app, "POST", "/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
}
