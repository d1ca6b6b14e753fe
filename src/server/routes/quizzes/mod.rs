use crate::server::router::TriviaState;
use axum::{Router, routing::post};

pub mod extract;
pub mod handlers;
pub mod select;

pub fn router() -> Router<TriviaState> {
    Router::new().route("/quizzes", post(handlers::play_quiz))
}
