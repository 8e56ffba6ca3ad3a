//! API request and response types
//!
//! Field names are camelCase on the wire so that the activity payload
//! published to the exchange matches the HTTP representation consumed by
//! the AI pipeline.

use crate::models::{ActivityType, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

/// Open-ended metric name to value map attached to an activity
pub type Metrics = HashMap<String, serde_json::Value>;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Plain acknowledgement with the server time it was produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

// ============================================================================
// Activity Types
// ============================================================================

/// Request to track a new activity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrackActivityRequest {
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Duration in minutes
    #[validate(range(min = 0, max = 1440, message = "Duration must be between 0 and 1440 minutes"))]
    pub duration: i32,
    #[validate(range(min = 0, max = 50000, message = "Calories burned must be between 0 and 50000"))]
    pub calories_burned: i32,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub additional_metrics: Metrics,
}

/// Activity as returned by the API and published to the exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub activity_id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub duration: i32,
    pub calories_burned: i32,
    pub start_time: DateTime<Utc>,
    pub additional_metrics: Metrics,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// User Types
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[validate(email(message = "Invalid email format"), length(max = 255))]
    pub email: String,
    #[validate(length(min = 6, max = 128, message = "Password must be between 6 and 128 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub last_name: String,
}

/// Partial user update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
}

/// User profile response (password is never included)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for name search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchQuery {
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserSearchQuery {
    /// Last name filter, ignoring blank values
    pub fn last_name_filter(&self) -> Option<&str> {
        self.last_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Zero-based page request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Page request after defaults and bounds were applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageQuery {
    pub const DEFAULT_SIZE: i64 = 10;
    pub const MAX_SIZE: i64 = 100;

    /// Apply defaults (page 0, size 10) and clamp to valid bounds
    pub fn normalize(&self) -> PageRequest {
        let page = self.page.unwrap_or(0).max(0);
        let size = self
            .size
            .unwrap_or(Self::DEFAULT_SIZE)
            .clamp(1, Self::MAX_SIZE);
        PageRequest { page, size }
    }
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

// ============================================================================
// Recommendation Types
// ============================================================================

/// AI-generated recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_id: Uuid,
    pub activity_type: Option<ActivityType>,
    pub recommendation: String,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
    pub safety: Vec<String>,
    pub created_at: DateTime<Utc>,
}
