//! Database repositories
//!
//! Each store is a trait so services can be wired with the PostgreSQL
//! implementation at start-up and with in-memory fakes in tests.

pub mod activity;
pub mod recommendation;
pub mod user;

pub use activity::{ActivityRecord, ActivityRepository, CreateActivity, PgActivityRepository};
pub use recommendation::{
    PgRecommendationRepository, RecommendationRecord, RecommendationRepository,
};
pub use user::{CreateUser, PgUserRepository, UserRecord, UserRepository};

/// Build an `ILIKE` pattern matching `term` as a substring
///
/// `%`, `_` and `\` in the term are matched literally.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// True when a repository error is a unique constraint violation
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}
