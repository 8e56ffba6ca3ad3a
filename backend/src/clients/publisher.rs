//! Activity publishing to the message broker
//!
//! Tracked activities are sent to a direct exchange for the AI pipeline.
//! Delivery is best effort: callers log failures and carry on.

use crate::config::RabbitMqConfig;
use async_trait::async_trait;
use fitness_tracker_shared::ActivityResponse;
use lapin::options::{
    BasicPublishOptions, ConfirmSelectOptions, ExchangeDeclareOptions, QueueBindOptions,
    QueueDeclareOptions,
};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties, ExchangeKind};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// AMQP delivery mode for messages that survive a broker restart
const PERSISTENT_DELIVERY: u8 = 2;

/// Why a publish did not go through
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("not connected to the message broker")]
    NotConnected,

    #[error("failed to serialize activity: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("broker error: {0}")]
    Broker(#[from] lapin::Error),

    #[error("broker did not confirm within {0:?}")]
    Timeout(Duration),

    #[error("broker rejected the message")]
    Rejected,
}

/// Sends persisted activities downstream
#[async_trait]
pub trait ActivityPublisher: Send + Sync {
    async fn publish(&self, activity: &ActivityResponse) -> Result<(), PublishError>;
}

/// RabbitMQ publisher with publisher confirms
///
/// Holds no channel when the broker was unreachable at start-up; every
/// publish then fails with [`PublishError::NotConnected`].
pub struct AmqpActivityPublisher {
    // Kept so the connection stays open for the lifetime of the channel
    _connection: Option<Connection>,
    channel: Option<Channel>,
    exchange: String,
    routing_key: String,
    timeout: Duration,
}

impl AmqpActivityPublisher {
    /// Connect and declare the exchange, queue, and binding
    pub async fn connect(config: &RabbitMqConfig) -> Result<Self, PublishError> {
        let connection = Connection::connect(&config.url, ConnectionProperties::default()).await?;
        let channel = connection.create_channel().await?;

        channel
            .exchange_declare(
                &config.exchange,
                ExchangeKind::Direct,
                ExchangeDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await?;
        channel
            .queue_declare(
                &config.queue,
                QueueDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await?;
        channel
            .queue_bind(
                &config.queue,
                &config.exchange,
                &config.routing_key,
                QueueBindOptions::default(),
                FieldTable::default(),
            )
            .await?;
        channel
            .confirm_select(ConfirmSelectOptions::default())
            .await?;

        Ok(Self {
            _connection: Some(connection),
            channel: Some(channel),
            ..Self::disconnected(config)
        })
    }

    /// Publisher that is not attached to a broker
    pub fn disconnected(config: &RabbitMqConfig) -> Self {
        Self {
            _connection: None,
            channel: None,
            exchange: config.exchange.clone(),
            routing_key: config.routing_key.clone(),
            timeout: Duration::from_millis(config.publish_timeout_ms),
        }
    }

    /// Connect with graceful fallback
    ///
    /// The activity service must start even when the broker is down, so a
    /// failed connection yields a disconnected publisher.
    pub async fn connect_or_disconnected(config: &RabbitMqConfig) -> Self {
        info!(exchange = %config.exchange, "Connecting to RabbitMQ...");
        match Self::connect(config).await {
            Ok(publisher) => {
                info!(
                    exchange = %config.exchange,
                    queue = %config.queue,
                    routing_key = %config.routing_key,
                    "RabbitMQ connection established"
                );
                publisher
            }
            Err(e) => {
                warn!("Failed to connect to RabbitMQ: {}. Activities will not be published.", e);
                Self::disconnected(config)
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.channel
            .as_ref()
            .map(|c| c.status().connected())
            .unwrap_or(false)
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn routing_key(&self) -> &str {
        &self.routing_key
    }
}

#[async_trait]
impl ActivityPublisher for AmqpActivityPublisher {
    async fn publish(&self, activity: &ActivityResponse) -> Result<(), PublishError> {
        let channel = self.channel.as_ref().ok_or(PublishError::NotConnected)?;
        let payload = serde_json::to_vec(activity)?;

        let send = async {
            let confirmation = channel
                .basic_publish(
                    &self.exchange,
                    &self.routing_key,
                    BasicPublishOptions::default(),
                    &payload,
                    BasicProperties::default()
                        .with_content_type("application/json".into())
                        .with_delivery_mode(PERSISTENT_DELIVERY),
                )
                .await?
                .await?;

            if confirmation.is_nack() {
                return Err(PublishError::Rejected);
            }
            Ok::<(), PublishError>(())
        };

        tokio::time::timeout(self.timeout, send)
            .await
            .map_err(|_| PublishError::Timeout(self.timeout))?
    }
}
