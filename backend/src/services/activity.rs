//! Activity tracking service
//!
//! The write path is validate user → persist → publish. Only the first two
//! steps decide the outcome of a request: once the activity is stored the
//! request succeeds, and a failed publish is logged and dropped. There is no
//! retry and no outbox.

use crate::clients::{ActivityPublisher, UserValidator};
use crate::error::ApiError;
use crate::repositories::{ActivityRecord, ActivityRepository, CreateActivity};
use fitness_tracker_shared::validation::validate_metrics;
use fitness_tracker_shared::{ActivityResponse, TrackActivityRequest};
use metrics::counter;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

/// Activity service for tracking and reading activities
pub struct ActivityService {
    activities: Arc<dyn ActivityRepository>,
    users: Arc<dyn UserValidator>,
    publisher: Arc<dyn ActivityPublisher>,
}

impl ActivityService {
    pub fn new(
        activities: Arc<dyn ActivityRepository>,
        users: Arc<dyn UserValidator>,
        publisher: Arc<dyn ActivityPublisher>,
    ) -> Self {
        Self {
            activities,
            users,
            publisher,
        }
    }

    /// Track a new activity for a known user
    pub async fn track_activity(
        &self,
        request: TrackActivityRequest,
    ) -> Result<ActivityResponse, ApiError> {
        info!(user_id = %request.user_id, "Processing activity tracking request");

        request.validate()?;
        validate_metrics(&request.additional_metrics).map_err(ApiError::InvalidInput)?;

        let is_valid_user = self
            .users
            .validate_user(request.user_id)
            .await
            .map_err(|e| {
                counter!("activity_user_validation_failures_total").increment(1);
                error!(user_id = %request.user_id, error = %e, "User validation unavailable");
                ApiError::DependencyUnavailable(format!("Could not validate user: {}", e))
            })?;

        if !is_valid_user {
            error!(user_id = %request.user_id, "Invalid user attempted to track activity");
            return Err(ApiError::InvalidInput(format!(
                "Invalid user: {}",
                request.user_id
            )));
        }

        let saved = self
            .activities
            .create(CreateActivity {
                user_id: request.user_id,
                activity_type: request.activity_type,
                duration: request.duration,
                calories_burned: request.calories_burned,
                start_time: request.start_time,
                additional_metrics: request.additional_metrics,
            })
            .await
            .map_err(ApiError::Internal)?;

        info!(activity_id = %saved.id, "Activity saved successfully");
        counter!("activities_tracked_total").increment(1);

        let response = to_response(saved);
        self.publish_best_effort(&response).await;

        Ok(response)
    }

    /// Hand the activity to the AI pipeline, swallowing any failure
    async fn publish_best_effort(&self, activity: &ActivityResponse) {
        match self.publisher.publish(activity).await {
            Ok(()) => {
                counter!("activity_publish_total", "outcome" => "success").increment(1);
                info!(activity_id = %activity.activity_id, "Published activity for AI processing");
            }
            Err(e) => {
                counter!("activity_publish_total", "outcome" => "failure").increment(1);
                error!(
                    activity_id = %activity.activity_id,
                    error = %e,
                    "Failed to publish activity; it will not be processed downstream"
                );
            }
        }
    }

    /// Get all activities of a user; empty when the user has none
    pub async fn get_user_activities(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ActivityResponse>, ApiError> {
        info!(%user_id, "Fetching activities for user");

        let activities = self
            .activities
            .find_by_user_id(user_id)
            .await
            .map_err(ApiError::Internal)?;

        info!(%user_id, count = activities.len(), "Found activities for user");
        Ok(activities.into_iter().map(to_response).collect())
    }

    /// Get a single activity
    pub async fn get_activity(&self, activity_id: Uuid) -> Result<ActivityResponse, ApiError> {
        self.activities
            .find_by_id(activity_id)
            .await
            .map_err(ApiError::Internal)?
            .map(to_response)
            .ok_or_else(|| {
                error!(%activity_id, "Activity not found");
                ApiError::NotFound(format!("Activity not found with ID: {}", activity_id))
            })
    }
}

fn to_response(record: ActivityRecord) -> ActivityResponse {
    ActivityResponse {
        activity_id: record.id,
        user_id: record.user_id,
        activity_type: record.activity_type,
        duration: record.duration,
        calories_burned: record.calories_burned,
        start_time: record.start_time,
        additional_metrics: record.additional_metrics.0,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}
