//! Error types for the shared wire model

use thiserror::Error;

/// Failure to parse an enumerated value from its text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown activity type: {0}")]
    UnknownActivityType(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}
