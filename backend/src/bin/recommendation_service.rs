//! Recommendation service: read access to AI-generated recommendations

use anyhow::Result;
use fitness_tracker_backend::config::{AppConfig, Service};
use fitness_tracker_backend::repositories::PgRecommendationRepository;
use fitness_tracker_backend::services::RecommendationService;
use fitness_tracker_backend::state::AppState;
use fitness_tracker_backend::{db, routes, server};
use std::sync::Arc;
use tracing::info;

const SERVICE: Service = Service::Recommendation;

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

    let repository = PgRecommendationRepository::new(pool.clone());
    let service = RecommendationService::new(Arc::new(repository));
    let server_config = config.server.clone();
    let state = AppState::new(service, pool, config).with_metrics(server::install_metrics());

    server::serve(routes::recommendation_router(state), &server_config).await
}
