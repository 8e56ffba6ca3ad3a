//! User repository for database operations

use super::like_pattern;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitness_tracker_shared::UserRole;
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[sqlx(try_from = "String")]
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

/// User store
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; fails on a duplicate email
    async fn create(&self, input: CreateUser) -> Result<UserRecord>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>>;

    async fn exists(&self, id: Uuid) -> Result<bool>;

    async fn email_exists(&self, email: &str) -> Result<bool>;

    /// Case-insensitive substring match on first name
    async fn search_by_first_name(&self, first_name: &str) -> Result<Vec<UserRecord>>;

    /// Case-insensitive substring match on first and last name jointly
    async fn search_by_full_name(&self, first_name: &str, last_name: &str)
        -> Result<Vec<UserRecord>>;

    async fn find_by_role(&self, role: UserRole) -> Result<Vec<UserRecord>>;

    /// One page of users, newest first
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UserRecord>>;

    /// Write the mutable fields of an existing user and bump `updated_at`
    async fn update(&self, user: &UserRecord) -> Result<UserRecord>;

    /// Returns false when no row was deleted
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

const USER_COLUMNS: &str =
    "id, email, password, first_name, last_name, role, created_at, updated_at";

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: CreateUser) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            INSERT INTO users (email, password, first_name, last_name, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&input.email)
        .bind(&input.password)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(input.role.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn email_exists(&self, email: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn search_by_first_name(&self, first_name: &str) -> Result<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE first_name ILIKE $1
            ORDER BY first_name, last_name
            "#
        ))
        .bind(like_pattern(first_name))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn search_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE first_name ILIKE $1 AND last_name ILIKE $2
            ORDER BY first_name, last_name
            "#
        ))
        .bind(like_pattern(first_name))
        .bind(like_pattern(last_name))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_by_role(&self, role: UserRole) -> Result<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = $1 ORDER BY created_at DESC"
        ))
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update(&self, user: &UserRecord) -> Result<UserRecord> {
        let updated = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            UPDATE users SET
                first_name = $2,
                last_name = $3,
                role = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
