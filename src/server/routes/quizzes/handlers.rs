use super::extract::QuizPayload;
use super::select::pick_random;
use crate::error::ApiError;
use crate::server::router::TriviaState;
use axum::{Json, extract::State};
use tracing::debug;
use trivia_schema::QuizResponse;

/// POST /quizzes
///
/// An exhausted pool is a 200 with `{"success": false, "question": false}`.
pub(super) async fn play_quiz(
    State(state): State<TriviaState>,
    QuizPayload(filter): QuizPayload,
) -> Result<Json<QuizResponse>, ApiError> {
    let candidates = state.db.list_quiz_candidates(filter).await?;

    let Some(question) = pick_random(&candidates, &mut rand::rng()) else {
        debug!("quiz pool exhausted");
        return Ok(Json(QuizResponse::exhausted()));
    };

    debug!(
        question_id = question.id,
        candidates = candidates.len(),
        "quiz question picked"
    );
    Ok(Json(QuizResponse::picked(question.format())))
}
