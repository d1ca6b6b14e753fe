use super::extract::{CategoryUpdate, NewQuestionPayload, SearchPayload};
use crate::db::{DbQuestion, QuestionPatch};
use crate::error::{ApiError, TriviaError};
use crate::server::router::TriviaState;
use crate::server::routes::categories::category_map;
use crate::server::routes::extract::PageQuery;
use crate::utils::pagination::{paginate, total_count};
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::{debug, error, info};
use trivia_schema::{
    QuestionCreatedResponse, QuestionDeletedResponse, QuestionUpdatedResponse, QuestionView,
    QuestionsPageResponse, SearchResponse,
};

/// GET /questions?page=N
pub(super) async fn list_questions(
    State(state): State<TriviaState>,
    page: PageQuery,
) -> Result<Json<QuestionsPageResponse>, ApiError> {
    let page = page.required()?;

    let questions = state.db.list_questions().await?;
    let total_questions = total_count(questions.len());
    let current: Vec<QuestionView> = paginate(page, &questions)
        .into_iter()
        .map(DbQuestion::format)
        .collect();
    if current.is_empty() {
        return Err(ApiError::not_found(format!(
            "page {page} is empty ({total_questions} questions)"
        )));
    }

    let categories = category_map(state.db.list_categories().await?);
    if categories.is_empty() {
        return Err(ApiError::not_found("no categories"));
    }

    Ok(Json(QuestionsPageResponse {
        success: true,
        questions: current,
        total_questions,
        categories,
    }))
}

/// PATCH /questions/{question_id}
///
/// An unknown id is 404 whatever the body; a bad body on a known id is 400.
pub(super) async fn update_question_category(
    State(state): State<TriviaState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<CategoryUpdate, ApiError>,
) -> Result<Json<QuestionUpdatedResponse>, ApiError> {
    let Path(question_id) = path?;

    if state.db.get_question(question_id).await?.is_none() {
        return Err(TriviaError::QuestionNotFound(question_id).into());
    }
    let CategoryUpdate(category) = body?;

    state
        .db
        .patch_question(QuestionPatch::category(question_id, category))
        .await?;

    debug!(question_id, "question category updated");
    Ok(Json(QuestionUpdatedResponse {
        success: true,
        question_id,
    }))
}

/// DELETE /questions/{question_id}
///
/// A missing row and a failed statement both answer 422; the log says which.
pub(super) async fn delete_question(
    State(state): State<TriviaState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionDeletedResponse>, ApiError> {
    let Path(question_id) = path?;

    let deleted = match state.db.delete_question(question_id).await {
        Ok(row) => row,
        Err(TriviaError::QuestionNotFound(id)) => {
            return Err(ApiError::unprocessable(format!(
                "delete: question {id} not found"
            )));
        }
        Err(e) => {
            error!(question_id, error = %e, "delete: store failure");
            return Err(ApiError::unprocessable(format!("delete: {e}")));
        }
    };

    let total_num_of_questions = state
        .db
        .count_questions()
        .await
        .map_err(|e| ApiError::unprocessable(format!("delete: count failed: {e}")))?;

    info!(question_id, "question deleted");
    Ok(Json(QuestionDeletedResponse {
        success: true,
        deleted_question: deleted.format(),
        total_num_of_questions,
    }))
}

/// POST /questions
pub(super) async fn add_question(
    State(state): State<TriviaState>,
    NewQuestionPayload(create): NewQuestionPayload,
) -> Result<Json<QuestionCreatedResponse>, ApiError> {
    let created = state.db.create_question(create).await.map_err(|e| {
        error!(error = %e, "insert question failed");
        ApiError::unprocessable(format!("insert: {e}"))
    })?;

    let total_num_of_questions = state
        .db
        .count_questions()
        .await
        .map_err(|e| ApiError::unprocessable(format!("insert: count failed: {e}")))?;

    info!(question_id = created.id, "question created");
    Ok(Json(QuestionCreatedResponse {
        success: true,
        total_num_of_questions,
        created_question: created.format(),
    }))
}

/// POST /questions/search
pub(super) async fn search_questions(
    State(state): State<TriviaState>,
    page: PageQuery,
    SearchPayload(search_term): SearchPayload,
) -> Result<Json<SearchResponse>, ApiError> {
    let matches = state.db.search_questions(search_term.clone()).await?;
    if matches.is_empty() {
        return Err(ApiError::not_found(format!(
            "no question matches {search_term:?}"
        )));
    }

    let total_questions = total_count(matches.len());
    let questions = paginate(page.or_first(), &matches)
        .into_iter()
        .map(DbQuestion::format)
        .collect();

    Ok(Json(SearchResponse {
        success: true,
        total_questions,
        questions,
    }))
}
