//! Recommendation API routes

use crate::error::ApiError;
use crate::services::RecommendationService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use fitness_tracker_shared::RecommendationResponse;
use uuid::Uuid;

type RecommendationState = AppState<RecommendationService>;

pub fn recommendation_routes() -> Router<RecommendationState> {
    Router::new()
        .route(
            "/api/recommendations/user/:user_id",
            get(get_user_recommendations),
        )
        .route(
            "/api/recommendations/activity/:activity_id",
            get(get_activity_recommendation),
        )
}

async fn get_user_recommendations(
    State(state): State<RecommendationState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<RecommendationResponse>>, ApiError> {
    Ok(Json(
        state.service().get_user_recommendations(user_id).await?,
    ))
}

async fn get_activity_recommendation(
    State(state): State<RecommendationState>,
    Path(activity_id): Path<Uuid>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    Ok(Json(
        state
            .service()
            .get_activity_recommendation(activity_id)
            .await?,
    ))
}
