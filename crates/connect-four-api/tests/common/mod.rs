//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use connect_four_core::repository::SnapshotStore;
use connect_four_core::rng::DeterministicRng;
use connect_four_game::application::controller::SessionController;
use connect_four_game::domain::strategy::RandomStrategy;
use connect_four_store::memory::MemorySnapshotStore;
use connect_four_store::pg_snapshot_store::PgSnapshotStore;
use connect_four_test_support::{RecordingMessageSender, SequenceRng};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use connect_four_api::app;
use connect_four_api::state::AppState;

/// Storage key used by every test app.
pub const CONTEXT: &str = "connect_four";

/// Build the full app over an in-memory store with a scripted RNG.
pub fn build_test_app(rng: SequenceRng) -> Router {
    build_app_with_store(Arc::new(MemorySnapshotStore::new()), rng)
}

/// Build the full app over a real `PgSnapshotStore`.
pub fn build_pg_test_app(pool: PgPool, rng: SequenceRng) -> Router {
    build_app_with_store(Arc::new(PgSnapshotStore::new(pool)), rng)
}

fn build_app_with_store(store: Arc<dyn SnapshotStore>, rng: SequenceRng) -> Router {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    let controller = SessionController::new(
        store,
        Arc::new(RecordingMessageSender::new()),
        rng,
        Arc::new(RandomStrategy),
    );
    app(AppState::new(Arc::new(controller), CONTEXT))
}

/// Send one chat message from `sender` and return the response.
pub async fn send_chat(
    app: Router,
    sender: &str,
    content: &str,
) -> (StatusCode, serde_json::Value) {
    let body = serde_json::json!({
        "message": { "content": content, "sender_email": sender, "type": "private" }
    });
    post_json(app, "/bots/connect_four", &body).await
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    respond(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    respond(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

/// Runs `request` through `app`. A body that is not JSON reads as `Null`.
async fn respond(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Contents of the messages addressed to `recipient`.
pub fn contents_for<'a>(json: &'a serde_json::Value, recipient: &str) -> Vec<&'a str> {
    json["messages"]
        .as_array()
        .map(|messages| {
            messages
                .iter()
                .filter(|m| m["recipient"] == recipient)
                .filter_map(|m| m["content"].as_str())
                .collect()
        })
        .unwrap_or_default()
}
