//! Document-store boundary for the admin layer.
//!
//! `MarketplaceStore` is the only way the admin layer reads or writes data.
//! `PgStore` is the production implementation; tests use `MemoryStore`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::marketplace::{
    ordered_pair, ApplicationRow, ConversationRow, MessageRow, NeedRow, SavedNeedRow,
    ShortlistRow, UserRow,
};

#[async_trait]
pub trait MarketplaceStore: Send + Sync {
    async fn user(&self, uid: &str) -> Result<Option<UserRow>, AppError>;
    async fn user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError>;
    async fn users(&self) -> Result<Vec<UserRow>, AppError>;

    async fn needs(&self) -> Result<Vec<NeedRow>, AppError>;
    async fn applications(&self) -> Result<Vec<ApplicationRow>, AppError>;
    async fn saved_needs(&self) -> Result<Vec<SavedNeedRow>, AppError>;
    async fn shortlists(&self) -> Result<Vec<ShortlistRow>, AppError>;

    async fn conversation(&self, id: Uuid) -> Result<Option<ConversationRow>, AppError>;
    /// Looks up the thread for an unordered participant pair.
    async fn find_conversation(&self, a: &str, b: &str)
        -> Result<Option<ConversationRow>, AppError>;
    /// Inserts a thread for the pair, or returns the existing one if a
    /// concurrent caller created it first.
    async fn insert_conversation(&self, a: &str, b: &str) -> Result<ConversationRow, AppError>;
    async fn insert_message(
        &self,
        conversation_id: Uuid,
        sender_uid: &str,
        body: &str,
    ) -> Result<MessageRow, AppError>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarketplaceStore for PgStore {
    async fn user(&self, uid: &str) -> Result<Option<UserRow>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT uid, name, email, role, created_at FROM users WHERE uid = $1",
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<UserRow>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT uid, name, email, role, created_at FROM users WHERE lower(email) = lower($1)",
        )
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn users(&self) -> Result<Vec<UserRow>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT uid, name, email, role, created_at FROM users ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn needs(&self) -> Result<Vec<NeedRow>, AppError> {
        let rows = sqlx::query_as::<_, NeedRow>(
            "SELECT id, startup_uid, title, description, status, created_at \
             FROM startup_needs ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn applications(&self) -> Result<Vec<ApplicationRow>, AppError> {
        let rows = sqlx::query_as::<_, ApplicationRow>(
            "SELECT id, executive_uid, need_id, status, applied_at \
             FROM applications ORDER BY applied_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn saved_needs(&self) -> Result<Vec<SavedNeedRow>, AppError> {
        let rows = sqlx::query_as::<_, SavedNeedRow>(
            "SELECT id, executive_uid, need_id, saved_at FROM saved_needs ORDER BY saved_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn shortlists(&self) -> Result<Vec<ShortlistRow>, AppError> {
        let rows = sqlx::query_as::<_, ShortlistRow>(
            "SELECT id, startup_uid, executive_uid, shortlisted_at \
             FROM shortlists ORDER BY shortlisted_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn conversation(&self, id: Uuid) -> Result<Option<ConversationRow>, AppError> {
        let row = sqlx::query_as::<_, ConversationRow>(
            "SELECT id, participant_a, participant_b, created_at FROM conversations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_conversation(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Option<ConversationRow>, AppError> {
        let (first, second) = ordered_pair(a, b);
        let row = sqlx::query_as::<_, ConversationRow>(
            "SELECT id, participant_a, participant_b, created_at FROM conversations \
             WHERE participant_a = $1 AND participant_b = $2",
        )
        .bind(first)
        .bind(second)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_conversation(&self, a: &str, b: &str) -> Result<ConversationRow, AppError> {
        let (first, second) = ordered_pair(a, b);
        // The no-op update makes RETURNING yield the existing row on conflict.
        let row = sqlx::query_as::<_, ConversationRow>(
            r#"
            INSERT INTO conversations (id, participant_a, participant_b)
            VALUES ($1, $2, $3)
            ON CONFLICT (participant_a, participant_b)
                DO UPDATE SET participant_a = EXCLUDED.participant_a
            RETURNING id, participant_a, participant_b, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(first)
        .bind(second)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_message(
        &self,
        conversation_id: Uuid,
        sender_uid: &str,
        body: &str,
    ) -> Result<MessageRow, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (id, conversation_id, sender_uid, body)
            VALUES ($1, $2, $3, $4)
            RETURNING id, conversation_id, sender_uid, body, sent_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(conversation_id)
        .bind(sender_uid)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
