//! Activity tracking API routes

use crate::error::ApiError;
use crate::services::ActivityService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fitness_tracker_shared::{ActivityResponse, TrackActivityRequest};
use uuid::Uuid;

type ActivityState = AppState<ActivityService>;

/// Create activity routes
pub fn activity_routes() -> Router<ActivityState> {
    Router::new()
        .route("/api/activities", post(track_activity))
        .route("/api/activities/:id", get(get_activity))
        .route("/api/activities/user/:user_id", get(get_user_activities))
}

/// POST /api/activities - Track an activity
///
/// Responds 201 once the activity is stored, whether or not it reached the
/// message broker.
async fn track_activity(
    State(state): State<ActivityState>,
    Json(req): Json<TrackActivityRequest>,
) -> Result<(StatusCode, Json<ActivityResponse>), ApiError> {
    let activity = state.service().track_activity(req).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /api/activities/:id
async fn get_activity(
    State(state): State<ActivityState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ActivityResponse>, ApiError> {
    Ok(Json(state.service().get_activity(id).await?))
}

/// GET /api/activities/user/:user_id
async fn get_user_activities(
    State(state): State<ActivityState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ActivityResponse>>, ApiError> {
    Ok(Json(state.service().get_user_activities(user_id).await?))
}
