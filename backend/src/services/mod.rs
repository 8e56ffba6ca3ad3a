//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod activity;
pub mod recommendation;
pub mod user;

pub use activity::ActivityService;
pub use recommendation::RecommendationService;
pub use user::UserService;
