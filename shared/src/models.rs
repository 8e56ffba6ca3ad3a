//! Domain enums shared by the services and their clients

use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a tracked activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Running,
    Walking,
    Cycling,
    Swimming,
    WeightTraining,
    Yoga,
    Hiit,
    Cardio,
    Stretching,
    Other,
}

impl ActivityType {
    pub const ALL: [ActivityType; 10] = [
        ActivityType::Running,
        ActivityType::Walking,
        ActivityType::Cycling,
        ActivityType::Swimming,
        ActivityType::WeightTraining,
        ActivityType::Yoga,
        ActivityType::Hiit,
        ActivityType::Cardio,
        ActivityType::Stretching,
        ActivityType::Other,
    ];

    /// Stored and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Running => "RUNNING",
            ActivityType::Walking => "WALKING",
            ActivityType::Cycling => "CYCLING",
            ActivityType::Swimming => "SWIMMING",
            ActivityType::WeightTraining => "WEIGHT_TRAINING",
            ActivityType::Yoga => "YOGA",
            ActivityType::Hiit => "HIIT",
            ActivityType::Cardio => "CARDIO",
            ActivityType::Stretching => "STRETCHING",
            ActivityType::Other => "OTHER",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        ActivityType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownActivityType(s.to_string()))
    }
}

impl TryFrom<String> for ActivityType {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Role of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USER" => Ok(UserRole::User),
            "ADMIN" => Ok(UserRole::Admin),
            _ => Err(ParseError::UnknownRole(s.to_string())),
        }
    }
}

impl TryFrom<String> for UserRole {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("RUNNING", ActivityType::Running)]
    #[case("running", ActivityType::Running)]
    #[case("weight_training", ActivityType::WeightTraining)]
    #[case("Weight-Training", ActivityType::WeightTraining)]
    #[case(" hiit ", ActivityType::Hiit)]
    fn test_activity_type_parse(#[case] input: &str, #[case] expected: ActivityType) {
        assert_eq!(input.parse::<ActivityType>().unwrap(), expected);
    }

    #[test]
    fn test_activity_type_unknown() {
        let err = "PARKOUR".parse::<ActivityType>().unwrap_err();
        assert_eq!(err, ParseError::UnknownActivityType("PARKOUR".to_string()));
    }

    #[test]
    fn test_activity_type_display_matches_serde() {
        for activity_type in ActivityType::ALL {
            let json = serde_json::to_string(&activity_type).unwrap();
            assert_eq!(json, format!("\"{}\"", activity_type));
        }
    }

    #[test]
    fn test_role_default_is_user() {
        assert_eq!(UserRole::default(), UserRole::User);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(UserRole::try_from("USER".to_string()).unwrap(), UserRole::User);
        assert!("root".parse::<UserRole>().is_err());
    }
}
