//! Route definitions for the fitness tracker services
//!
//! Every service gets the same health and metrics routes and middleware
//! stack; only the `/api` routes differ.

use crate::services::{ActivityService, RecommendationService, UserService};
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod activities;
mod health;
mod recommendations;
mod users;


pub use activities::activity_routes;
pub use recommendations::recommendation_routes;
pub use users::user_routes;

/// Create a service router with health routes and all middleware
pub fn create_router<S>(state: AppState<S>, api: Router<AppState<S>>) -> Router
where
    S: Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health::health_check::<S>))
        .route("/health/ready", get(health::readiness_check::<S>))
        .route("/health/live", get(health::liveness_check::<S>))
        .route("/metrics", get(health::metrics::<S>))
        .merge(api)
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn user_router(state: AppState<UserService>) -> Router {
    create_router(state, user_routes())
}

pub fn activity_router(state: AppState<ActivityService>) -> Router {
    create_router(state, activity_routes())
}

pub fn recommendation_router(state: AppState<RecommendationService>) -> Router {
    create_router(state, recommendation_routes())
}
