//! Database Connection Pool Module
//!
//! PostgreSQL connection pooling via deadpool-postgres plus a thin client
//! wrapper exposing one method per query the API needs. All statements are
//! plain SQL against the four tables in `sql/schema.sql`; there is no ORM
//! and no migration tooling.

use crate::error::{ApiError, ApiResult};
use crate::types::{FlashcardResponse, GeneratedFlashcard, GeneratedQuiz, QuizResponse};
use chrono::Utc;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use serde_json::Value as JsonValue;
use tokio_postgres::{NoTls, Row};
use uuid::Uuid;

// ============================================================================
// CONNECTION POOL CONFIGURATION
// ============================================================================

/// Database connection pool configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL host
    pub host: String,
    /// PostgreSQL port
    pub port: u16,
    /// Database name
    pub dbname: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Maximum pool size
    pub max_size: usize,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "studyai".to_string(),
            user: "postgres".to_string(),
            password: "".to_string(),
            max_size: 16,
        }
    }
}

impl DbConfig {
    /// Create a new database configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("STUDYAI_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("STUDYAI_DB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5432),
            dbname: std::env::var("STUDYAI_DB_NAME").unwrap_or_else(|_| "studyai".to_string()),
            user: std::env::var("STUDYAI_DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: std::env::var("STUDYAI_DB_PASSWORD").unwrap_or_default(),
            max_size: std::env::var("STUDYAI_DB_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(16),
        }
    }

    /// Whether credentials were actually supplied. Startup only warns when
    /// they are missing; the server still boots and requests fail lazily.
    pub fn has_credentials(&self) -> bool {
        !self.password.is_empty()
    }

    /// Create a connection pool from this configuration.
    pub fn create_pool(&self) -> ApiResult<Pool> {
        let mut cfg = Config::new();
        cfg.host = Some(self.host.clone());
        cfg.port = Some(self.port);
        cfg.dbname = Some(self.dbname.clone());
        cfg.user = Some(self.user.clone());
        cfg.password = Some(self.password.clone());

        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        cfg.pool = Some(PoolConfig::new(self.max_size));

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| ApiError::database_error(format!("Failed to create pool: {}", e)))?;

        Ok(pool)
    }
}

// ============================================================================
// DATABASE CLIENT WRAPPER
// ============================================================================

/// Database client wrapping the connection pool.
#[derive(Clone)]
pub struct DbClient {
    pool: Pool,
}

impl DbClient {
    /// Create a new database client with the given pool.
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create a new database client from configuration.
    pub fn from_config(config: &DbConfig) -> ApiResult<Self> {
        let pool = config.create_pool()?;
        Ok(Self::new(pool))
    }

    /// Get a connection from the pool.
    pub async fn get_conn(&self) -> ApiResult<deadpool_postgres::Object> {
        self.pool.get().await.map_err(ApiError::from)
    }

    /// Cheap connectivity probe for the readiness endpoint.
    pub async fn health_check(&self) -> ApiResult<()> {
        let conn = self.get_conn().await?;
        conn.query_one("SELECT 1", &[]).await?;
        Ok(())
    }

    // ========================================================================
    // NOTE OPERATIONS
    // ========================================================================

    /// Overwrite the single note row for a user, stamping the current time.
    pub async fn note_upsert(&self, user_id: &str, content: &str) -> ApiResult<()> {
        let conn = self.get_conn().await?;
        conn.execute(
            "INSERT INTO notes (id, content, updated_at) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE SET content = $2, updated_at = $3",
            &[&user_id, &content, &Utc::now()],
        )
        .await?;
        Ok(())
    }

    /// Fetch a user's note text, if any row exists.
    pub async fn note_get(&self, user_id: &str) -> ApiResult<Option<String>> {
        let conn = self.get_conn().await?;
        let row = conn
            .query_opt("SELECT content FROM notes WHERE id = $1", &[&user_id])
            .await?;
        Ok(row.map(|r| r.get(0)))
    }

    // ========================================================================
    // FLASHCARD OPERATIONS
    // ========================================================================

    /// Insert one generated flashcard. Generation issues these one at a
    /// time with no surrounding transaction; a failure mid-batch leaves the
    /// earlier cards committed.
    pub async fn flashcard_insert(
        &self,
        user_id: &str,
        card: &GeneratedFlashcard,
    ) -> ApiResult<Uuid> {
        let conn = self.get_conn().await?;
        let id = Uuid::now_v7();
        conn.execute(
            "INSERT INTO flashcards (id, user_id, question, answer, difficulty, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
            &[
                &id,
                &user_id,
                &card.question,
                &card.answer,
                &card.difficulty,
                &Utc::now(),
            ],
        )
        .await?;
        Ok(id)
    }

    /// List all flashcards for a user, in whatever order the store returns.
    pub async fn flashcard_list(&self, user_id: &str) -> ApiResult<Vec<FlashcardResponse>> {
        let conn = self.get_conn().await?;
        let rows = conn
            .query(
                "SELECT id, user_id, question, answer, difficulty, created_at \
                 FROM flashcards WHERE user_id = $1",
                &[&user_id],
            )
            .await?;
        Ok(rows.iter().map(flashcard_from_row).collect())
    }

    // ========================================================================
    // QUIZ OPERATIONS
    // ========================================================================

    /// Insert one generated quiz item and return its id.
    pub async fn quiz_insert(&self, user_id: &str, quiz: &GeneratedQuiz) -> ApiResult<Uuid> {
        let conn = self.get_conn().await?;
        let id = Uuid::now_v7();
        let options = JsonValue::from(quiz.options.clone());
        conn.execute(
            "INSERT INTO quizzes (id, user_id, question, options, correct_answer, difficulty, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
            &[
                &id,
                &user_id,
                &quiz.question,
                &options,
                &quiz.correct_answer,
                &quiz.difficulty,
                &Utc::now(),
            ],
        )
        .await?;
        Ok(id)
    }

    /// List all quiz items for a user.
    pub async fn quiz_list(&self, user_id: &str) -> ApiResult<Vec<QuizResponse>> {
        let conn = self.get_conn().await?;
        let rows = conn
            .query(
                "SELECT id, user_id, question, options, correct_answer, difficulty, created_at \
                 FROM quizzes WHERE user_id = $1",
                &[&user_id],
            )
            .await?;
        rows.iter().map(quiz_from_row).collect()
    }

    /// Look up the stored correct-answer index for a quiz.
    pub async fn quiz_correct_answer(&self, quiz_id: Uuid) -> ApiResult<Option<i32>> {
        let conn = self.get_conn().await?;
        let row = conn
            .query_opt(
                "SELECT correct_answer FROM quizzes WHERE id = $1",
                &[&quiz_id],
            )
            .await?;
        Ok(row.map(|r| r.get(0)))
    }

    /// Record a submitted answer in the answer log.
    pub async fn quiz_answer_insert(
        &self,
        quiz_id: Uuid,
        user_id: &str,
        user_answer: i32,
        is_correct: bool,
    ) -> ApiResult<()> {
        let conn = self.get_conn().await?;
        conn.execute(
            "INSERT INTO quiz_answers (id, quiz_id, user_id, user_answer, is_correct, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
            &[
                &Uuid::now_v7(),
                &quiz_id,
                &user_id,
                &user_answer,
                &is_correct,
                &Utc::now(),
            ],
        )
        .await?;
        Ok(())
    }
}

// ============================================================================
// ROW MAPPING
// ============================================================================

fn flashcard_from_row(row: &Row) -> FlashcardResponse {
    FlashcardResponse {
        id: row.get(0),
        user_id: row.get(1),
        question: row.get(2),
        answer: row.get(3),
        difficulty: row.get(4),
        created_at: row.get(5),
    }
}

fn quiz_from_row(row: &Row) -> ApiResult<QuizResponse> {
    let options_json: JsonValue = row.get(3);
    let options: Vec<String> = serde_json::from_value(options_json)?;
    Ok(QuizResponse {
        id: row.get(0),
        user_id: row.get(1),
        question: row.get(2),
        options,
        correct_answer: row.get(4),
        difficulty: row.get(5),
        created_at: row.get(6),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DbConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.dbname, "studyai");
        assert_eq!(config.max_size, 16);
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_pool_honors_configured_max_size() {
        // Building the pool never touches the network, so this runs
        // without a database.
        let config = DbConfig {
            max_size: 3,
            ..DbConfig::default()
        };
        let pool = config.create_pool().unwrap();
        assert_eq!(pool.status().max_size, 3);
    }

    #[test]
    fn test_has_credentials() {
        let config = DbConfig {
            password: "secret".to_string(),
            ..DbConfig::default()
        };
        assert!(config.has_credentials());
    }
}
