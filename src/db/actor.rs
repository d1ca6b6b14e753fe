use crate::db::models::{DbCategory, DbQuestion};
use crate::db::patch::{CategoryCreate, QuestionCreate, QuestionPatch, QuizFilter};
use crate::db::schema::SQLITE_INIT;
use crate::error::TriviaError;
use crate::patches::DbPatchable;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

#[derive(Debug)]
pub enum DbActorMessage {
    /// Insert a question and return the stored row.
    CreateQuestion(QuestionCreate, RpcReplyPort<Result<DbQuestion, TriviaError>>),

    /// Insert a category and return its id.
    CreateCategory(CategoryCreate, RpcReplyPort<Result<i64, TriviaError>>),

    /// Patch a question by id.
    PatchQuestion(QuestionPatch, RpcReplyPort<Result<(), TriviaError>>),

    /// Delete a question by id and return the removed row.
    DeleteQuestion(i64, RpcReplyPort<Result<DbQuestion, TriviaError>>),

    /// Get a question by id.
    GetQuestion(i64, RpcReplyPort<Result<Option<DbQuestion>, TriviaError>>),

    /// Get a category by id.
    GetCategory(i64, RpcReplyPort<Result<Option<DbCategory>, TriviaError>>),

    /// List every question, ordered by id.
    ListQuestions(RpcReplyPort<Result<Vec<DbQuestion>, TriviaError>>),

    /// List every category, ordered by id.
    ListCategories(RpcReplyPort<Result<Vec<DbCategory>, TriviaError>>),

    /// Count all questions.
    CountQuestions(RpcReplyPort<Result<i64, TriviaError>>),

    /// Case-insensitive (Unicode) substring match on the question text.
    SearchQuestions(String, RpcReplyPort<Result<Vec<DbQuestion>, TriviaError>>),

    /// List questions whose category text equals the given value.
    ListQuestionsByCategory(String, RpcReplyPort<Result<Vec<DbQuestion>, TriviaError>>),

    /// List questions eligible for the next quiz round.
    ListQuizCandidates(QuizFilter, RpcReplyPort<Result<Vec<DbQuestion>, TriviaError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn create_question(&self, create: QuestionCreate) -> Result<DbQuestion, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::CreateQuestion, create).map_err(|e| {
            TriviaError::RactorError(format!("DbActor CreateQuestion RPC failed: {e}"))
        })?
    }

    pub async fn create_category(&self, create: CategoryCreate) -> Result<i64, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::CreateCategory, create).map_err(|e| {
            TriviaError::RactorError(format!("DbActor CreateCategory RPC failed: {e}"))
        })?
    }

    pub async fn patch_question(&self, patch: QuestionPatch) -> Result<(), TriviaError> {
        ractor::call!(self.actor, DbActorMessage::PatchQuestion, patch).map_err(|e| {
            TriviaError::RactorError(format!("DbActor PatchQuestion RPC failed: {e}"))
        })?
    }

    pub async fn delete_question(&self, id: i64) -> Result<DbQuestion, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::DeleteQuestion, id).map_err(|e| {
            TriviaError::RactorError(format!("DbActor DeleteQuestion RPC failed: {e}"))
        })?
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<DbQuestion>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::GetQuestion, id)
            .map_err(|e| TriviaError::RactorError(format!("DbActor GetQuestion RPC failed: {e}")))?
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<DbCategory>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::GetCategory, id)
            .map_err(|e| TriviaError::RactorError(format!("DbActor GetCategory RPC failed: {e}")))?
    }

    pub async fn list_questions(&self) -> Result<Vec<DbQuestion>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::ListQuestions).map_err(|e| {
            TriviaError::RactorError(format!("DbActor ListQuestions RPC failed: {e}"))
        })?
    }

    pub async fn list_categories(&self) -> Result<Vec<DbCategory>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::ListCategories).map_err(|e| {
            TriviaError::RactorError(format!("DbActor ListCategories RPC failed: {e}"))
        })?
    }

    pub async fn count_questions(&self) -> Result<i64, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::CountQuestions).map_err(|e| {
            TriviaError::RactorError(format!("DbActor CountQuestions RPC failed: {e}"))
        })?
    }

    pub async fn search_questions(&self, term: String) -> Result<Vec<DbQuestion>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::SearchQuestions, term).map_err(|e| {
            TriviaError::RactorError(format!("DbActor SearchQuestions RPC failed: {e}"))
        })?
    }

    pub async fn list_questions_by_category(
        &self,
        category: String,
    ) -> Result<Vec<DbQuestion>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::ListQuestionsByCategory, category).map_err(
            |e| TriviaError::RactorError(format!("DbActor ListQuestionsByCategory RPC failed: {e}")),
        )?
    }

    pub async fn list_quiz_candidates(
        &self,
        filter: QuizFilter,
    ) -> Result<Vec<DbQuestion>, TriviaError> {
        ractor::call!(self.actor, DbActorMessage::ListQuizCandidates, filter).map_err(|e| {
            TriviaError::RactorError(format!("DbActor ListQuizCandidates RPC failed: {e}"))
        })?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        let pool = &state.pool;
        match message {
            DbActorMessage::CreateQuestion(create, reply) => {
                let _ = reply.send(self.create_question(pool, create).await);
            }
            DbActorMessage::CreateCategory(create, reply) => {
                let _ = reply.send(self.create_category(pool, create).await);
            }
            DbActorMessage::PatchQuestion(patch, reply) => {
                let _ = reply.send(patch.apply_patch(pool).await);
            }
            DbActorMessage::DeleteQuestion(id, reply) => {
                let _ = reply.send(self.delete_question(pool, id).await);
            }
            DbActorMessage::GetQuestion(id, reply) => {
                let _ = reply.send(self.get_question(pool, id).await);
            }
            DbActorMessage::GetCategory(id, reply) => {
                let _ = reply.send(self.get_category(pool, id).await);
            }
            DbActorMessage::ListQuestions(reply) => {
                let _ = reply.send(self.list_questions(pool).await);
            }
            DbActorMessage::ListCategories(reply) => {
                let _ = reply.send(self.list_categories(pool).await);
            }
            DbActorMessage::CountQuestions(reply) => {
                let _ = reply.send(self.count_questions(pool).await);
            }
            DbActorMessage::SearchQuestions(term, reply) => {
                let _ = reply.send(self.search_questions(pool, &term).await);
            }
            DbActorMessage::ListQuestionsByCategory(category, reply) => {
                let _ = reply.send(self.list_questions_by_category(pool, &category).await);
            }
            DbActorMessage::ListQuizCandidates(filter, reply) => {
                let _ = reply.send(self.list_quiz_candidates(pool, filter).await);
            }
        }
        Ok(())
    }
}

impl DbActor {
    async fn create_question(
        &self,
        pool: &SqlitePool,
        create: QuestionCreate,
    ) -> Result<DbQuestion, TriviaError> {
        let row = sqlx::query_as::<_, DbQuestion>(
            r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES (?, ?, ?, ?)
        RETURNING id, question, answer, category, difficulty
        "#,
        )
        .bind(create.question)
        .bind(create.answer)
        .bind(create.category)
        .bind(create.difficulty)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    async fn create_category(
        &self,
        pool: &SqlitePool,
        create: CategoryCreate,
    ) -> Result<i64, TriviaError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO categories (id, type)
        VALUES (?, ?)
        RETURNING id
        "#,
        )
        .bind(create.id)
        .bind(create.kind)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    async fn delete_question(&self, pool: &SqlitePool, id: i64) -> Result<DbQuestion, TriviaError> {
        let row = sqlx::query_as::<_, DbQuestion>(
            r#"
        DELETE FROM questions
        WHERE id = ?
        RETURNING id, question, answer, category, difficulty
        "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        row.ok_or(TriviaError::QuestionNotFound(id))
    }

    async fn get_question(
        &self,
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<DbQuestion>, TriviaError> {
        let row = sqlx::query_as::<_, DbQuestion>(
            r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn get_category(
        &self,
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<DbCategory>, TriviaError> {
        let row = sqlx::query_as::<_, DbCategory>(
            r#"
        SELECT id, type
        FROM categories
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn list_questions(&self, pool: &SqlitePool) -> Result<Vec<DbQuestion>, TriviaError> {
        let rows = sqlx::query_as::<_, DbQuestion>(
            r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        ORDER BY id
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn list_categories(&self, pool: &SqlitePool) -> Result<Vec<DbCategory>, TriviaError> {
        let rows = sqlx::query_as::<_, DbCategory>(
            r#"
        SELECT id, type
        FROM categories
        ORDER BY id
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn count_questions(&self, pool: &SqlitePool) -> Result<i64, TriviaError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Substring match with Unicode case folding. SQLite's `lower` folds
    /// ASCII only, so the comparison runs here; `%` and `_` stay literal.
    async fn search_questions(
        &self,
        pool: &SqlitePool,
        term: &str,
    ) -> Result<Vec<DbQuestion>, TriviaError> {
        let needle = term.to_lowercase();
        let rows = self
            .list_questions(pool)
            .await?
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect();

        Ok(rows)
    }

    async fn list_questions_by_category(
        &self,
        pool: &SqlitePool,
        category: &str,
    ) -> Result<Vec<DbQuestion>, TriviaError> {
        let rows = sqlx::query_as::<_, DbQuestion>(
            r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE category = ?
        ORDER BY id
        "#,
        )
        .bind(category)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn list_quiz_candidates(
        &self,
        pool: &SqlitePool,
        filter: QuizFilter,
    ) -> Result<Vec<DbQuestion>, TriviaError> {
        let exclude = serde_json::to_string(&filter.exclude)?;

        let rows = sqlx::query_as::<_, DbQuestion>(
            r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE id NOT IN (SELECT value FROM json_each(?))
          AND (? IS NULL OR category = ?)
        ORDER BY id
        "#,
        )
        .bind(exclude)
        .bind(filter.category.as_deref())
        .bind(filter.category.as_deref())
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

/// Spawn the database actor and return a cloneable handle.
pub async fn spawn(database_url: &str) -> Result<DbActorHandle, TriviaError> {
    // Unnamed: several stores may live in one process (tests, tooling).
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .map_err(|e| TriviaError::RactorError(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), TriviaError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
