//! Application state management
//!
//! Each service binary shares one `AppState` across its handlers. The state
//! is generic over the service it carries so the three binaries reuse the
//! same health and metrics routes.

use crate::config::AppConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// All fields are cheap to clone: the pool is internally reference counted
/// and everything else sits behind an `Arc`.
pub struct AppState<S> {
    /// Business service for this binary
    pub service: Arc<S>,
    /// Database connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Prometheus render handle, absent when no recorder was installed
    pub metrics: Option<PrometheusHandle>,
}

// Derived Clone would require `S: Clone`
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            db: self.db.clone(),
            config: Arc::clone(&self.config),
            metrics: self.metrics.clone(),
        }
    }
}

impl<S> AppState<S> {
    pub fn new(service: S, db: PgPool, config: AppConfig) -> Self {
        Self {
            service: Arc::new(service),
            db,
            config: Arc::new(config),
            metrics: None,
        }
    }

    /// Attach the Prometheus handle used by `/metrics`
    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }

    #[inline]
    pub fn service(&self) -> &S {
        &self.service
    }

    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
