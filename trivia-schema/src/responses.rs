//! Response bodies. Every body carries `success`.

use serde::{Deserialize, Serialize};

use crate::question::{CategoryMap, QuestionView};

/// `GET /questions?page=N`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    /// Size of the whole store, not of the page.
    pub total_questions: i64,
    pub categories: CategoryMap,
}

/// `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// `PATCH /questions/{question_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionUpdatedResponse {
    pub success: bool,
    pub question_id: i64,
}

/// `DELETE /questions/{question_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted_question: QuestionView,
    pub total_num_of_questions: i64,
}

/// `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub total_num_of_questions: i64,
    pub created_question: QuestionView,
}

/// `POST /questions/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    /// Number of matches before pagination.
    pub total_questions: i64,
    pub questions: Vec<QuestionView>,
}

/// `GET /categories/{category_id}/questions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: i64,
    /// The requested path id, echoed back as-is.
    pub current_category: i64,
}

/// `POST /quizzes`
///
/// An exhausted pool is reported as `{"success": false, "question": false}`
/// with a 200 status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuizQuestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuizQuestion {
    Picked(QuestionView),
    Exhausted(bool),
}

impl QuizResponse {
    pub fn picked(question: QuestionView) -> Self {
        Self {
            success: true,
            question: QuizQuestion::Picked(question),
        }
    }

    pub fn exhausted() -> Self {
        Self {
            success: false,
            question: QuizQuestion::Exhausted(false),
        }
    }
}

/// Fixed error envelope: `{"success": false, "error": <status>, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}
