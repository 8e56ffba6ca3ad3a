//! Activity repository for database operations
//!
//! Additional metrics are schemaless and stored as a JSONB document.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_tracker_shared::{ActivityType, Metrics};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Activity record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    #[sqlx(try_from = "String")]
    pub activity_type: ActivityType,
    pub duration: i32,
    pub calories_burned: i32,
    pub start_time: DateTime<Utc>,
    pub additional_metrics: Json<Metrics>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an activity
#[derive(Debug, Clone)]
pub struct CreateActivity {
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub duration: i32,
    pub calories_burned: i32,
    pub start_time: DateTime<Utc>,
    pub additional_metrics: Metrics,
}

/// Activity store
///
/// Activities are append-only: there is no update or delete.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Persist a new activity; the store assigns id and timestamps
    async fn create(&self, input: CreateActivity) -> Result<ActivityRecord>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ActivityRecord>>;

    /// All activities of a user, most recent start time first
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<ActivityRecord>>;
}

/// PostgreSQL-backed activity store
#[derive(Clone)]
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    async fn create(&self, input: CreateActivity) -> Result<ActivityRecord> {
        let record = sqlx::query_as::<_, ActivityRecord>(
            r#"
            INSERT INTO activities
                (user_id, activity_type, duration, calories_burned, start_time, additional_metrics)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, activity_type, duration, calories_burned, start_time,
                      additional_metrics, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.activity_type.as_str())
        .bind(input.duration)
        .bind(input.calories_burned)
        .bind(input.start_time)
        .bind(Json(&input.additional_metrics))
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ActivityRecord>> {
        let record = sqlx::query_as::<_, ActivityRecord>(
            r#"
            SELECT id, user_id, activity_type, duration, calories_burned, start_time,
                   additional_metrics, created_at, updated_at
            FROM activities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<ActivityRecord>> {
        let records = sqlx::query_as::<_, ActivityRecord>(
            r#"
            SELECT id, user_id, activity_type, duration, calories_burned, start_time,
                   additional_metrics, created_at, updated_at
            FROM activities
            WHERE user_id = $1
            ORDER BY start_time DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
