use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};

use fieldwork_core::MemoryStore;
use fieldwork_server::{AppState, create_api_router};

// Helpers are shared across test binaries; not every binary uses all of them.
#[allow(unused)]
pub fn spawn_server() -> TestServer {
    let state = AppState::new(Arc::new(MemoryStore::new()));
    TestServer::new(create_api_router(state)).expect("test server should build")
}

#[allow(unused)]
pub async fn create_inspector(server: &TestServer, name: &str, email: &str) -> Value {
    let response = server
        .post("/api/inspectors")
        .json(&json!({
            "name": name,
            "email": email,
            "timezone": "Europe/London"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}

#[allow(unused)]
pub async fn create_job(server: &TestServer, title: &str, description: &str) -> Value {
    let response = server
        .post("/api/jobs")
        .json(&json!({ "title": title, "description": description }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}

#[allow(unused)]
pub async fn assign_job(server: &TestServer, job_id: i64, inspector_id: i64) -> Value {
    let response = server
        .post(&format!("/api/jobs/{job_id}/assign"))
        .json(&json!({
            "inspector_id": inspector_id,
            "scheduled_at": "2026-02-17T10:00:00Z"
        }))
        .await;
    response.assert_status_ok();
    response.json()
}
