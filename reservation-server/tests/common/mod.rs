//! Shared helpers for in-process HTTP scenario tests
//!
//! The router is driven with `tower::ServiceExt::oneshot`; nothing binds a
//! socket. Each app gets its own in-memory database and a clock frozen at
//! Wednesday 2030-01-02 09:00 UTC.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use reservation_server::db::DbService;
use reservation_server::{Config, FixedClock, ServerState, build_app};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TODAY: &str = "2030-01-02";
pub const TOMORROW: &str = "2030-01-03";
pub const NEXT_TUESDAY: &str = "2030-01-08";
pub const YESTERDAY: &str = "2029-12-31";

pub fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 2, 9, 0, 0).unwrap()
}

pub struct TestApp {
    pub router: axum::Router,
    pub clock: FixedClock,
    pub state: ServerState,
}

pub async fn spawn_app() -> TestApp {
    let db = DbService::in_memory().await.expect("in-memory database");
    let clock = FixedClock::new(frozen_now());
    let config = Config {
        database_url: "sqlite::memory:".into(),
        ..Config::default()
    };
    let state = ServerState::new(config, db, Arc::new(clock.clone()));
    let router = build_app().with_state(state.clone());
    TestApp {
        router,
        clock,
        state,
    }
}

impl TestApp {
    /// Drive the router with one request and return (status, parsed body)
    pub async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let resp = self.router.clone().oneshot(req).await.expect("oneshot failed");
        let status = resp.status();
        let bytes = resp
            .into_body()
            .collect()
            .await
            .expect("body collect failed")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body is not valid JSON")
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, data: Value) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(json!({ "data": data }))).await
    }

    pub async fn put(&self, uri: &str, data: Value) -> (StatusCode, Value) {
        self.call(Method::PUT, uri, Some(json!({ "data": data }))).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::DELETE, uri, None).await
    }

    /// Create a reservation and return its id
    pub async fn book(&self, data: Value) -> i64 {
        let (status, body) = self.post("/reservations", data).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["reservation_id"].as_i64().unwrap()
    }

    /// Create a table and return its id
    pub async fn add_table(&self, name: &str, capacity: i64) -> i64 {
        let (status, body) = self
            .post("/tables", json!({ "table_name": name, "capacity": capacity }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["table_id"].as_i64().unwrap()
    }

    pub async fn set_status(&self, id: i64, status: &str) -> (StatusCode, Value) {
        self.put(&format!("/reservations/{id}/status"), json!({ "status": status }))
            .await
    }
}

/// A reservation that passes every rule against the frozen clock
pub fn valid_reservation() -> Value {
    json!({
        "first_name": "A",
        "last_name": "B",
        "mobile_number": "555",
        "reservation_date": TOMORROW,
        "reservation_time": "12:00",
        "people": 2
    })
}

pub fn reservation_with(field: &str, value: Value) -> Value {
    let mut data = valid_reservation();
    data[field] = value;
    data
}

/// Assert an error body: HTTP status, numeric code, and message
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, code: u16, message: &str) {
    assert_eq!(status, expected, "{body}");
    assert_eq!(body["status"], expected.as_u16(), "{body}");
    assert_eq!(body["code"], code, "{body}");
    assert_eq!(body["message"], message, "{body}");
    assert!(body.get("data").is_none(), "{body}");
}
