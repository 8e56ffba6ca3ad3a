//! Outbound collaborators of the activity service

pub mod publisher;
pub mod users;

pub use publisher::{ActivityPublisher, AmqpActivityPublisher, PublishError};
pub use users::{HttpUserValidator, UserValidator};
