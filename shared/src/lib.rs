//! Fitness Tracker Shared Library
//!
//! This crate contains the wire types, domain enums, and validation
//! helpers used by the user, activity, and recommendation services.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{ActivityType, UserRole};
pub use types::*;
