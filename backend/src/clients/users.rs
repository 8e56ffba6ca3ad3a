//! User validation against the user service
//!
//! The activity service holds no copy of user data; it asks the user
//! service whether an id exists before persisting an activity.

use crate::config::UserServiceConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Answers whether a user id is known
#[async_trait]
pub trait UserValidator: Send + Sync {
    /// `Ok(false)` for an unknown user, `Err` when the answer could not be obtained
    async fn validate_user(&self, user_id: Uuid) -> Result<bool>;
}

/// HTTP client for `GET /api/users/{id}/validate`
#[derive(Clone)]
pub struct HttpUserValidator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserValidator {
    pub fn new(config: &UserServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build user service HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl UserValidator for HttpUserValidator {
    async fn validate_user(&self, user_id: Uuid) -> Result<bool> {
        let url = format!("{}/api/users/{}/validate", self.base_url, user_id);
        debug!(%user_id, %url, "Validating user with user service");

        let valid = self
            .client
            .get(&url)
            .send()
            .await
            .context("User service request failed")?
            .error_for_status()
            .context("User service returned an error status")?
            .json::<bool>()
            .await
            .context("User service returned an invalid body")?;

        Ok(valid)
    }
}
