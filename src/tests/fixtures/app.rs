use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::estimates::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::estimates::core::status::TransitionPolicy;
use crate::shell::config::EstimateSettings;
use crate::shell::state::{AppState, EstimateEventStore};

pub fn make_test_state() -> AppState {
    AppState::in_memory(&EstimateSettings::default())
}

pub fn make_strict_test_state() -> AppState {
    AppState::in_memory(&EstimateSettings {
        transition_policy: TransitionPolicy::Strict,
        ..EstimateSettings::default()
    })
}

pub fn make_offline_event_store_state() -> AppState {
    let mut event_store = EstimateEventStore::new();
    event_store.toggle_offline();
    AppState::with_stores(
        Arc::new(event_store),
        Arc::new(InMemoryProjections::new()),
        &EstimateSettings::default(),
    )
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
