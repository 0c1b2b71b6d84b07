#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use university_records::api::router;
use university_records::db::MIGRATOR;
use university_records::state::AppState;

/// A single connection keeps every query on the same in-memory database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");
    pool
}

pub async fn test_app() -> Router {
    router(AppState::new(memory_pool().await))
}

/// For tests that inspect the tables directly.
pub async fn test_app_with_pool() -> (Router, SqlitePool) {
    let pool = memory_pool().await;
    (router(AppState::new(pool.clone())), pool)
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    call(app, Method::GET, uri, None).await
}

/// POSTs `body` and returns the generated id, failing the test on anything but 201.
pub async fn create(app: &Router, path: &str, body: Value) -> i64 {
    let (status, json) = call(app, Method::POST, path, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create {path} failed: {json}");
    json["id"].as_i64().expect("id missing from create response")
}

pub async fn list(app: &Router, path: &str) -> Vec<Value> {
    let (status, json) = get(app, path).await;
    assert_eq!(status, StatusCode::OK, "list {path} failed: {json}");
    json.as_array().cloned().expect("list did not return an array")
}
