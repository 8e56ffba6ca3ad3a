//! Activity service: records workouts and forwards them to the AI pipeline

use anyhow::Result;
use fitness_tracker_backend::clients::{AmqpActivityPublisher, HttpUserValidator};
use fitness_tracker_backend::config::{AppConfig, Service};
use fitness_tracker_backend::repositories::PgActivityRepository;
use fitness_tracker_backend::services::ActivityService;
use fitness_tracker_backend::state::AppState;
use fitness_tracker_backend::{db, routes, server};
use std::sync::Arc;
use tracing::info;

const SERVICE: Service = Service::Activity;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    server::init_tracing(SERVICE);

    let config = AppConfig::load(SERVICE)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting {}", SERVICE
    );

    if AppConfig::is_production() {
        server::check_production_config(SERVICE, &config);
    }

    info!("Connecting to database...");
    let pool = db::create_pool(SERVICE, &config.database.url, config.database.max_connections).await?;
    if !AppConfig::is_production() {
        db::run_migrations(&pool, SERVICE).await?;
    }

    let users = HttpUserValidator::new(&config.user_service)?;
    info!(base_url = %config.user_service.base_url, "User validation configured");

    // Starts without a broker; publishes then fail and are logged
    let publisher = AmqpActivityPublisher::connect_or_disconnected(&config.rabbitmq).await;

    let service = ActivityService::new(
        Arc::new(PgActivityRepository::new(pool.clone())),
        Arc::new(users),
        Arc::new(publisher),
    );
    let server_config = config.server.clone();
    let state = AppState::new(service, pool, config).with_metrics(server::install_metrics());

    server::serve(routes::activity_router(state), &server_config).await
}
