//! Startup fixture: `{ "categories": [...], "questions": [...] }`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use super::actor::DbActorHandle;
use super::patch::{CategoryCreate, QuestionCreate};
use crate::error::TriviaError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<CategoryCreate>,
    #[serde(default)]
    pub questions: Vec<QuestionCreate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already had categories; nothing was written.
    Skipped,
    Applied { categories: usize, questions: usize },
}

impl SeedData {
    pub async fn load(path: &Path) -> Result<Self, TriviaError> {
        let raw = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Inserts the fixture only into a store without categories.
    pub async fn apply(self, db: &DbActorHandle) -> Result<SeedOutcome, TriviaError> {
        if !db.list_categories().await?.is_empty() {
            debug!("categories already present, skipping seed");
            return Ok(SeedOutcome::Skipped);
        }

        let categories = self.categories.len();
        let questions = self.questions.len();

        for category in self.categories {
            db.create_category(category).await?;
        }
        for question in self.questions {
            db.create_question(question).await?;
        }

        info!(categories, questions, "seed applied");
        Ok(SeedOutcome::Applied {
            categories,
            questions,
        })
    }
}
