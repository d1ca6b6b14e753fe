use crate::server::router::TriviaState;
use axum::{
    Router,
    routing::{get, patch, post},
};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<TriviaState> {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::add_question),
        )
        .route("/questions/search", post(handlers::search_questions))
        .route(
            "/questions/{question_id}",
            patch(handlers::update_question_category).delete(handlers::delete_question),
        )
}
