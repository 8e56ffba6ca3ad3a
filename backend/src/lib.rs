//! Fitness Tracker Backend Library
//!
//! Shared building blocks for the user, activity, and recommendation
//! service binaries.

pub mod clients;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;
