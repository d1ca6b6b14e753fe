use crate::db::QuizFilter;
use crate::error::ApiError;
use crate::utils::logging::debug_request_body;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use trivia_schema::QuizRequest;

/// `quizCategory.id` meaning "draw from every category".
const ANY_CATEGORY: i64 = 0;

/// Validated body of `POST /quizzes`, already turned into a store filter.
pub(crate) struct QuizPayload(pub(crate) QuizFilter);

impl<S> FromRequest<S> for QuizPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    /// Missing `previousQuestions`, `quizCategory` or `quizCategory.id` is `BadRequest`.
    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<QuizRequest>::from_request(req, &()).await?;
        debug_request_body("play_quiz", &body);

        let category = (body.quiz_category.id != ANY_CATEGORY)
            .then(|| body.quiz_category.id.to_string());

        Ok(Self(QuizFilter {
            exclude: body.previous_questions,
            category,
        }))
    }
}
