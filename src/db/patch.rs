use serde::{Deserialize, Serialize};
use trivia_schema::NewQuestion;

// Re-export the patch payload from the neutral crate-private module so that
// `trivia::db::QuestionPatch` and `trivia::db::patch::QuestionPatch` both resolve.
pub use crate::patches::QuestionPatch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCreate {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCreate {
    /// Explicit id, or `None` to let SQLite assign the next one.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<NewQuestion> for QuestionCreate {
    fn from(q: NewQuestion) -> Self {
        Self {
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: Some(q.category),
        }
    }
}

/// Filter for drawing quiz questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizFilter {
    /// Question ids already asked.
    pub exclude: Vec<i64>,
    /// `None` => any category.
    pub category: Option<String>,
}
