use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Formatted question as returned by every endpoint that emits questions.
///
/// Exactly five keys: `id`, `question`, `answer`, `category`, `difficulty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Category id stored as text; not checked against the categories table.
    pub category: Option<String>,
    pub difficulty: i64,
}

/// Category id -> display type. Serialized as a JSON object keyed by the
/// decimal id, ordered by id.
pub type CategoryMap = BTreeMap<i64, String>;
