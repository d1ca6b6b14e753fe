//! Crate-private patch types shared by the DB actor and the HTTP handlers.
//!
//! The `db` module re-exports these so external paths stay stable
//! (e.g. `trivia::db::QuestionPatch`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Abstraction for applying a patch payload to the database.
#[async_trait]
pub trait DbPatchable {
    async fn apply_patch(&self, pool: &SqlitePool) -> Result<(), crate::error::TriviaError>;
}

/// Category reassignment of a single question row.
///
/// The category is stored as given; `None` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPatch {
    pub id: i64,
    pub category: Option<String>,
}

impl QuestionPatch {
    pub fn category(id: i64, category: Option<String>) -> Self {
        Self { id, category }
    }
}
