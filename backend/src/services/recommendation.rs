//! Recommendation lookups
//!
//! Lookup by user returns whatever exists, possibly nothing. Lookup by
//! activity treats a missing recommendation as an error, since the caller
//! asked about one specific activity.

use crate::error::ApiError;
use crate::repositories::{RecommendationRecord, RecommendationRepository};
use fitness_tracker_shared::{ActivityType, RecommendationResponse};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

pub struct RecommendationService {
    recommendations: Arc<dyn RecommendationRepository>,
}

impl RecommendationService {
    pub fn new(recommendations: Arc<dyn RecommendationRepository>) -> Self {
        Self { recommendations }
    }

    pub async fn get_user_recommendations(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<RecommendationResponse>, ApiError> {
        let records = self
            .recommendations
            .find_by_user_id(user_id)
            .await
            .map_err(ApiError::Internal)?;

        debug!(%user_id, count = records.len(), "Fetched recommendations for user");
        Ok(records.into_iter().map(to_response).collect())
    }

    pub async fn get_activity_recommendation(
        &self,
        activity_id: Uuid,
    ) -> Result<RecommendationResponse, ApiError> {
        self.recommendations
            .find_by_activity_id(activity_id)
            .await
            .map_err(ApiError::Internal)?
            .map(to_response)
            .ok_or_else(|| {
                ApiError::NotFound(format!("No recommendation found for: {}", activity_id))
            })
    }
}

fn to_response(record: RecommendationRecord) -> RecommendationResponse {
    // Rows come from another writer; an unrecognised type is dropped, not fatal
    let activity_type = record.activity_type.as_deref().and_then(|t| {
        t.parse::<ActivityType>()
            .map_err(|e| warn!(recommendation_id = %record.id, error = %e, "Ignoring activity type"))
            .ok()
    });

    RecommendationResponse {
        id: record.id,
        user_id: record.user_id,
        activity_id: record.activity_id,
        activity_type,
        recommendation: record.recommendation,
        improvements: record.improvements,
        suggestions: record.suggestions,
        safety: record.safety,
        created_at: record.created_at,
    }
}
