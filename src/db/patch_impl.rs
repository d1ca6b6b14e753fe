//! QuestionPatch -> DbPatchable implementation.
//!
//! This sits in the `db` module because it contains SQL/table knowledge.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::TriviaError;
use crate::patches::{DbPatchable, QuestionPatch};

#[async_trait]
impl DbPatchable for QuestionPatch {
    async fn apply_patch(&self, pool: &SqlitePool) -> Result<(), TriviaError> {
        let res = sqlx::query(
            r#"
            UPDATE questions
            SET category = ?
            WHERE id = ?
            "#,
        )
        .bind(self.category.as_deref())
        .bind(self.id)
        .execute(pool)
        .await?;

        let affected = res.rows_affected();
        debug!(
            table = "questions",
            id = self.id,
            affected,
            cleared = self.category.is_none(),
            "db patch applied"
        );

        if affected == 0 {
            return Err(TriviaError::QuestionNotFound(self.id));
        }

        Ok(())
    }
}
