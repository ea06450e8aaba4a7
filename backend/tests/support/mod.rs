//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the request plumbing lives here rather than being copied into each file.

use actix_web::http::StatusCode;
use actix_web::test::{self as actix_test, TestRequest};
use learnxcel::domain::TRACE_ID_HEADER;
use learnxcel::inbound::http::test_utils::test_app;
use learnxcel::test_support::TestDatabase;
use serde_json::Value;

/// Status, trace header, and decoded JSON body of one response.
pub struct Reply {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

/// Provision a fresh migrated database for one test.
pub async fn database() -> TestDatabase {
    TestDatabase::new().await.expect("test database")
}

/// Serve `request` through the full application over `database`.
pub async fn send(database: &TestDatabase, request: TestRequest) -> Reply {
    let app = actix_test::init_service(test_app(database.http_state())).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = actix_test::read_body(response).await;
    let body = serde_json::from_slice(&bytes).expect("JSON body");
    Reply {
        status,
        trace_id,
        body,
    }
}

/// Read the `id` field of a created resource.
pub fn id_of(body: &Value) -> i64 {
    body.get("id").and_then(Value::as_i64).expect("numeric id")
}
