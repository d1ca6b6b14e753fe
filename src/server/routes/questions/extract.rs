use crate::db::QuestionCreate;
use crate::error::ApiError;
use crate::utils::logging::debug_request_body;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use trivia_schema::{CreateQuestionRequest, SearchRequest, UpdateCategoryRequest};

/// Validated body of `POST /questions`.
pub(crate) struct NewQuestionPayload(pub(crate) QuestionCreate);

impl<S> FromRequest<S> for NewQuestionPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    /// Missing body, malformed JSON and missing or falsy fields are all `BadRequest`.
    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<CreateQuestionRequest>::from_request(req, &()).await?;
        debug_request_body("add_question", &body);

        let question = body
            .validate()
            .map_err(|field| ApiError::bad_request(format!("missing or empty field `{field}`")))?;

        Ok(Self(question.into()))
    }
}

/// New category text for `PATCH /questions/{question_id}`; `None` clears it.
pub(crate) struct CategoryUpdate(pub(crate) Option<String>);

impl<S> FromRequest<S> for CategoryUpdate
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<UpdateCategoryRequest>::from_request(req, &()).await?;
        debug_request_body("update_question_category", &body);

        Ok(Self(body.category_text()))
    }
}

/// Search term of `POST /questions/search`.
pub(crate) struct SearchPayload(pub(crate) String);

impl<S> FromRequest<S> for SearchPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<SearchRequest>::from_request(req, &()).await?;
        debug_request_body("search_questions", &body);

        Ok(Self(body.search_term))
    }
}
