//! User service: registration and user record management

use anyhow::Result;
use fitness_tracker_backend::config::{AppConfig, Service};
use fitness_tracker_backend::repositories::PgUserRepository;
use fitness_tracker_backend::services::UserService;
use fitness_tracker_backend::state::AppState;
use fitness_tracker_backend::{db, routes, server};
use std::sync::Arc;
use tracing::info;

const SERVICE: Service = Service::User;

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

    let service = UserService::new(Arc::new(PgUserRepository::new(pool.clone())));
    let server_config = config.server.clone();
    let state = AppState::new(service, pool, config).with_metrics(server::install_metrics());

    server::serve(routes::user_router(state), &server_config).await
}
