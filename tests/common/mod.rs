#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;
use trivia::config::CorsConfig;
use trivia::db::{CategoryCreate, DbActorHandle, QuestionCreate};
use trivia::server::{TriviaState, trivia_router};

/// SQLite file under the system temp dir, removed (with WAL/SHM) on drop.
pub struct TempDb {
    pub path: PathBuf,
    pub url: String,
}

impl TempDb {
    pub fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "trivia-{prefix}-{}-{nanos}.sqlite",
            std::process::id()
        ));
        let url = format!("sqlite:{}", path.display());
        Self { path, url }
    }

    pub async fn spawn(&self) -> DbActorHandle {
        trivia::db::spawn(&self.url)
            .await
            .expect("failed to spawn DbActor")
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let path = self.path.to_string_lossy().to_string();
        let _ = std::fs::remove_file(format!("{path}-wal"));
        let _ = std::fs::remove_file(format!("{path}-shm"));
        let _ = std::fs::remove_file(&self.path);
    }
}

pub fn app(db: &DbActorHandle) -> Router {
    trivia_router(TriviaState::new(db.clone()), &CorsConfig::default())
}

pub async fn add_category(db: &DbActorHandle, id: i64, kind: &str) {
    db.create_category(CategoryCreate {
        id: Some(id),
        kind: kind.to_string(),
    })
    .await
    .expect("create category");
}

pub async fn add_question(db: &DbActorHandle, question: &str, category: &str) -> i64 {
    db.create_question(QuestionCreate {
        question: question.to_string(),
        answer: format!("answer to {question}"),
        difficulty: 2,
        category: Some(category.to_string()),
    })
    .await
    .expect("create question")
    .id
}

/// Sends one request and returns the status plus the parsed JSON body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, raw) = send_raw(app, method, uri, body).await;
    let json = serde_json::from_str(&raw).unwrap_or(Value::Null);
    (status, json)
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (
        status,
        String::from_utf8(bytes.to_vec()).expect("response body was not utf-8"),
    )
}

pub const NOT_FOUND_BODY: &str = r#"{"success":false,"error":404,"message":"Resource not found."}"#;
pub const BAD_REQUEST_BODY: &str = r#"{"success":false,"error":400,"message":"Bad Request."}"#;
pub const UNPROCESSABLE_BODY: &str =
    r#"{"success":false,"error":422,"message":"Unprocessable entity."}"#;
