//! Common test utilities for integration tests
//!
//! Each service migrates its own test database. URLs come from
//! `TEST_USERS_DATABASE_URL`, `TEST_ACTIVITIES_DATABASE_URL` and
//! `TEST_RECOMMENDATIONS_DATABASE_URL`. Tests share these databases and
//! run concurrently, so each test works only with ids it created itself.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitness_tracker_backend::{
    clients::{AmqpActivityPublisher, HttpUserValidator},
    config::{AppConfig, Service, UserServiceConfig},
    db,
    repositories::{PgActivityRepository, PgRecommendationRepository, PgUserRepository},
    routes,
    services::{ActivityService, RecommendationService, UserService},
    state::AppState,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: PgPool,
}

impl TestApp {
    /// User service against a real database
    pub async fn users() -> Self {
        let (config, pool) = setup(Service::User, "TEST_USERS_DATABASE_URL").await;

        let service = UserService::new(Arc::new(PgUserRepository::new(pool.clone())));
        let app = routes::user_router(AppState::new(service, pool.clone(), config));
        Self { app, pool }
    }

    /// Activity service validating users against `user_service_url`, with no broker
    pub async fn activities(user_service_url: &str) -> Self {
        let (mut config, pool) = setup(Service::Activity, "TEST_ACTIVITIES_DATABASE_URL").await;

        config.user_service = UserServiceConfig {
            base_url: user_service_url.to_string(),
            timeout_secs: 2,
        };
        let users = HttpUserValidator::new(&config.user_service).expect("Failed to build validator");
        let publisher = AmqpActivityPublisher::disconnected(&config.rabbitmq);

        let service = ActivityService::new(
            Arc::new(PgActivityRepository::new(pool.clone())),
            Arc::new(users),
            Arc::new(publisher),
        );
        let app = routes::activity_router(AppState::new(service, pool.clone(), config));
        Self { app, pool }
    }

    /// Recommendation service against a real database
    pub async fn recommendations() -> Self {
        let (config, pool) =
            setup(Service::Recommendation, "TEST_RECOMMENDATIONS_DATABASE_URL").await;

        let repository = PgRecommendationRepository::new(pool.clone());
        let service = RecommendationService::new(Arc::new(repository));
        let app = routes::recommendation_router(AppState::new(service, pool.clone(), config));
        Self { app, pool }
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None).await
    }

    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("PUT", path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        self.send("DELETE", path, None).await
    }

    async fn send(&self, method: &str, path: &str, body: Option<&str>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}

async fn setup(service: Service, url_var: &str) -> (AppConfig, PgPool) {
    let mut config = AppConfig::for_service(service);
    config.server.port = 0;
    config.database.url = std::env::var(url_var).unwrap_or_else(|_| {
        format!("{}_test", config.database.url)
    });
    config.database.max_connections = 5;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to create test database pool");

    db::run_migrations(&pool, service)
        .await
        .expect("Failed to run migrations");

    (config, pool)
}
