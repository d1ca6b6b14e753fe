//! Request bodies, one per endpoint that accepts JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `POST /questions`
///
/// Every field is optional at the serde level so that a missing field is
/// reported through [`CreateQuestionRequest::validate`] instead of a parser error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    /// String or number; stored as text.
    pub category: Option<Value>,
}

/// A question body that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: String,
}

impl CreateQuestionRequest {
    /// Rejects missing or falsy fields: empty strings, a zero difficulty, and a
    /// category that is null, empty, zero or not a scalar.
    ///
    /// Returns the name of the first offending field.
    pub fn validate(self) -> Result<NewQuestion, &'static str> {
        let question = self
            .question
            .filter(|q| !q.is_empty())
            .ok_or("question")?;
        let answer = self.answer.filter(|a| !a.is_empty()).ok_or("answer")?;
        let difficulty = self.difficulty.filter(|d| *d != 0).ok_or("difficulty")?;
        let category = self
            .category
            .as_ref()
            .and_then(truthy_category_text)
            .ok_or("category")?;

        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

fn truthy_category_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// `PATCH /questions/{question_id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub category: Option<Value>,
}

impl UpdateCategoryRequest {
    /// Text to persist as the new category. The value is not validated:
    /// strings are kept verbatim, `null`/absent clears the category and any
    /// other JSON value is stored as its compact JSON text.
    pub fn category_text(&self) -> Option<String> {
        match self.category.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// `POST /questions/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// `POST /quizzes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(rename = "previousQuestions")]
    pub previous_questions: Vec<i64>,
    #[serde(rename = "quizCategory")]
    pub quiz_category: QuizCategory,
}

/// Category selector sent by the quiz client. `id == 0` means "any category".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_id_lax")]
    pub id: i64,
    /// Display name echoed by clients; ignored by the server.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Accepts an id as a JSON integer or as a decimal string.
fn deserialize_id_lax<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;

    match v {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| serde::de::Error::custom("expected an integer id")),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom("expected a decimal id string")),
        _ => Err(serde::de::Error::custom(
            "expected an integer or a string for quizCategory.id",
        )),
    }
}
