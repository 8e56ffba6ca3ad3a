//! Process start-up shared by the service binaries

use crate::config::{AppConfig, ServerConfig, Service};
use anyhow::Result;
use axum::Router;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// JSON output in production for log aggregation, pretty output otherwise.
pub fn init_tracing(service: Service) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "fitness_tracker_backend=info,tower_http=info".into()
        } else {
            "fitness_tracker_backend=debug,tower_http=debug,sqlx=warn,lapin=info".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    info!(service = %service, "Tracing initialized");
}

/// Install the Prometheus recorder
///
/// Returns `None` when a recorder is already installed; metrics then go to
/// that recorder and `/metrics` answers 404.
pub fn install_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Failed to install Prometheus recorder: {}", e);
            None
        }
    }
}

/// Validate configuration for production deployment
pub fn check_production_config(service: Service, config: &AppConfig) {
    let is_local = |url: &str| url.contains("localhost") || url.contains("127.0.0.1");

    if is_local(&config.database.url) {
        warn!("Database URL contains localhost - ensure this is intentional for production");
    }
    if service == Service::Activity {
        if is_local(&config.user_service.base_url) {
            warn!("User service URL contains localhost - ensure this is intentional for production");
        }
        if is_local(&config.rabbitmq.url) {
            warn!("RabbitMQ URL contains localhost - ensure this is intentional for production");
        }
    }
}

/// Bind and serve until SIGINT or SIGTERM
pub async fn serve(app: Router, config: &ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, service = %config.name, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
