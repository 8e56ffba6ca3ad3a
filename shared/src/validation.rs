//! Input validation functions
//!
//! Field-level checks live on the request types as `validator` derives.
//! The functions here cover rules the derive macros cannot express.

use crate::types::Metrics;

/// Maximum number of entries in an activity's additional metrics
pub const MAX_METRICS: usize = 50;

/// Maximum length of a metric name
pub const MAX_METRIC_NAME_LEN: usize = 64;

/// Validate the additional metrics map of an activity
pub fn validate_metrics(metrics: &Metrics) -> Result<(), String> {
    if metrics.len() > MAX_METRICS {
        return Err(format!("At most {} additional metrics are allowed", MAX_METRICS));
    }
    for name in metrics.keys() {
        if name.trim().is_empty() {
            return Err("Metric names cannot be empty".to_string());
        }
        if name.len() > MAX_METRIC_NAME_LEN {
            return Err(format!(
                "Metric name '{}' exceeds {} characters",
                name, MAX_METRIC_NAME_LEN
            ));
        }
    }
    Ok(())
}

/// Validate a name search term
pub fn validate_search_term(term: &str) -> Result<(), String> {
    if term.trim().is_empty() {
        return Err("Search term cannot be empty".to_string());
    }
    if term.len() > 100 {
        return Err("Search term too long".to_string());
    }
    Ok(())
}
