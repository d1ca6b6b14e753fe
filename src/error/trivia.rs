use thiserror::Error as ThisError;

/// Internal failures raised below the HTTP layer (database actor, seeding).
///
/// Handlers convert these into [`super::ApiError`]; the two "not found" variants
/// stay distinct from store failures so callers can tell them apart.
#[derive(Debug, ThisError)]
pub enum TriviaError {
    #[error("Question not found for id={0}")]
    QuestionNotFound(i64),

    #[error("Category not found for id={0}")]
    CategoryNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TriviaError {
    /// `true` for the variants that mean "the requested row does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TriviaError::QuestionNotFound(_) | TriviaError::CategoryNotFound(_)
        )
    }
}
