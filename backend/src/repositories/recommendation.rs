//! Recommendation repository (read-only)
//!
//! Rows are produced by the AI pipeline; this service never writes them.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Recommendation record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecommendationRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_id: Uuid,
    pub activity_type: Option<String>,
    pub recommendation: String,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
    pub safety: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Recommendation store
#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// All recommendations for a user, newest first
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RecommendationRecord>>;

    /// Newest recommendation produced for an activity
    async fn find_by_activity_id(&self, activity_id: Uuid) -> Result<Option<RecommendationRecord>>;
}

/// PostgreSQL-backed recommendation store
#[derive(Clone)]
pub struct PgRecommendationRepository {
    pool: PgPool,
}

impl PgRecommendationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecommendationRepository for PgRecommendationRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RecommendationRecord>> {
        let records = sqlx::query_as::<_, RecommendationRecord>(
            r#"
            SELECT id, user_id, activity_id, activity_type, recommendation,
                   improvements, suggestions, safety, created_at
            FROM recommendations
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn find_by_activity_id(&self, activity_id: Uuid) -> Result<Option<RecommendationRecord>> {
        let record = sqlx::query_as::<_, RecommendationRecord>(
            r#"
            SELECT id, user_id, activity_id, activity_type, recommendation,
                   improvements, suggestions, safety, created_at
            FROM recommendations
            WHERE activity_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(activity_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
