use crate::db::DbCategory;
use crate::server::router::TriviaState;
use axum::{Router, routing::get};
use trivia_schema::CategoryMap;

pub mod handlers;

pub fn router() -> Router<TriviaState> {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(handlers::list_category_questions),
        )
}

/// Category rows as the `{id: type}` map sent to clients.
pub(crate) fn category_map(rows: Vec<DbCategory>) -> CategoryMap {
    rows.into_iter().map(|c| (c.id, c.kind)).collect()
}
