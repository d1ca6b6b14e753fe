use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_schema::QuestionView;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct DbQuestion {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Category id as text; not a foreign key.
    pub category: Option<String>,
    pub difficulty: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct DbCategory {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

impl DbQuestion {
    /// JSON representation shared by every endpoint.
    pub fn format(&self) -> QuestionView {
        QuestionView {
            id: self.id,
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category.clone(),
            difficulty: self.difficulty,
        }
    }
}
