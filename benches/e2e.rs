//! Full request path: router, extractors, actor round-trip and SQLite.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::Request,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;
use tower::ServiceExt;
use trivia::config::CorsConfig;
use trivia::db::SeedData;
use trivia::server::{TriviaState, trivia_router};

fn temp_db_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("trivia-bench-e2e-{}.sqlite", std::process::id()));
    path
}

fn remove_db(path: &Path) {
    let p = path.to_string_lossy();
    let _ = std::fs::remove_file(format!("{p}-wal"));
    let _ = std::fs::remove_file(format!("{p}-shm"));
    let _ = std::fs::remove_file(path);
}

fn setup(rt: &Runtime, path: &Path) -> Router {
    rt.block_on(async {
        let db = trivia::db::spawn(&format!("sqlite:{}", path.display()))
            .await
            .expect("spawn db actor");
        let seed = Path::new(env!("CARGO_MANIFEST_DIR")).join("seed/trivia.json");
        SeedData::load(&seed)
            .await
            .expect("load seed")
            .apply(&db)
            .await
            .expect("apply seed");
        trivia_router(TriviaState::new(db), &CorsConfig::default())
    })
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<&'static str>) -> usize {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json)),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let resp = app.clone().oneshot(req).await.expect("call router");
    to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body")
        .len()
}

fn bench_e2e(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let path = temp_db_path();
    remove_db(&path);
    let app = setup(&rt, &path);

    let mut group = c.benchmark_group("e2e");

    group.bench_function("list_questions_page_1", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(call(&app, "GET", "/questions?page=1", None).await) });
    });
    group.bench_function("search_questions", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(
                call(
                    &app,
                    "POST",
                    "/questions/search",
                    Some(r#"{"searchTerm":"the"}"#),
                )
                .await,
            )
        });
    });
    group.bench_function("play_quiz_any_category", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(
                call(
                    &app,
                    "POST",
                    "/quizzes",
                    Some(r#"{"previousQuestions":[1,2,3],"quizCategory":{"id":0}}"#),
                )
                .await,
            )
        });
    });

    group.finish();
    remove_db(&path);
}

criterion_group!(benches, bench_e2e);
criterion_main!(benches);
