use super::category_map;
use crate::db::DbQuestion;
use crate::error::{ApiError, TriviaError};
use crate::server::router::TriviaState;
use crate::server::routes::extract::PageQuery;
use crate::utils::pagination::{paginate, total_count};
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use trivia_schema::{CategoriesResponse, CategoryQuestionsResponse};

/// Category id that stands for "every question".
const ALL_CATEGORIES: i64 = 0;

/// GET /categories
pub(super) async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = category_map(state.db.list_categories().await?);
    if categories.is_empty() {
        return Err(ApiError::not_found("no categories"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{category_id}/questions
pub(super) async fn list_category_questions(
    State(state): State<TriviaState>,
    path: Result<Path<i64>, PathRejection>,
    page: PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(category_id) = path?;

    let questions = if category_id == ALL_CATEGORIES {
        state.db.list_questions().await?
    } else {
        let category = state
            .db
            .get_category(category_id)
            .await?
            .ok_or(TriviaError::CategoryNotFound(category_id))?;
        state
            .db
            .list_questions_by_category(category.id.to_string())
            .await?
    };

    let total_questions = total_count(questions.len());
    let questions = paginate(page.or_first(), &questions)
        .into_iter()
        .map(DbQuestion::format)
        .collect();

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category_id,
    }))
}
