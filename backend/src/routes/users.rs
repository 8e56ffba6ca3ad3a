//! User API routes

use crate::error::ApiError;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use fitness_tracker_shared::{
    MessageResponse, PageQuery, RegisterUserRequest, UpdateUserRequest, UserResponse, UserRole,
    UserSearchQuery,
};
use uuid::Uuid;

type UserState = AppState<UserService>;

/// Create user routes
pub fn user_routes() -> Router<UserState> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/register", post(register))
        .route("/api/users/logout", post(logout))
        .route("/api/users/search", get(search_users))
        .route("/api/users/email/:email", get(get_by_email))
        .route("/api/users/role/:role", get(get_by_role))
        .route(
            "/api/users/:id",
            get(get_profile).put(update_user).delete(delete_user),
        )
        .route("/api/users/:id/validate", get(validate_user))
}

/// POST /api/users/register
async fn register(
    State(state): State<UserState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.service().register(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/:id
async fn get_profile(
    State(state): State<UserState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(state.service().get_profile(id).await?))
}

/// PUT /api/users/:id
async fn update_user(
    State(state): State<UserState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(state.service().update_user(id, req).await?))
}

/// DELETE /api/users/:id
async fn delete_user(
    State(state): State<UserState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    Ok(Json(state.service().delete_user(id).await?))
}

/// GET /api/users/:id/validate - plain `true`/`false` body
async fn validate_user(
    State(state): State<UserState>,
    Path(id): Path<Uuid>,
) -> Result<Json<bool>, ApiError> {
    Ok(Json(state.service().user_exists(id).await?))
}

/// GET /api/users/email/:email
async fn get_by_email(
    State(state): State<UserState>,
    Path(email): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(state.service().get_by_email(&email).await?))
}

/// GET /api/users/search?firstName=&lastName=
async fn search_users(
    State(state): State<UserState>,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    Ok(Json(state.service().search_users(&query).await?))
}

/// GET /api/users/role/:role - role matched case-insensitively
async fn get_by_role(
    State(state): State<UserState>,
    Path(role): Path<String>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let role: UserRole = role.parse()?;
    Ok(Json(state.service().find_by_role(role).await?))
}

/// GET /api/users?page=&size=
async fn list_users(
    State(state): State<UserState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    Ok(Json(state.service().list_users(&query).await?))
}

/// POST /api/users/logout
async fn logout(State(state): State<UserState>, headers: HeaderMap) -> Json<MessageResponse> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    Json(state.service().logout(authorization))
}
