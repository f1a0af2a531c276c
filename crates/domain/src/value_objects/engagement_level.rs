//! Engagement level value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// How engaged the meeting participants were
///
/// Lenient on the way in: unrecognized values coerce to
/// [`EngagementLevel::Medium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    /// Active participation, energetic discussion
    High,
    /// Ordinary level of participation
    #[default]
    Medium,
    /// Flat or disengaged discussion
    Low,
}

impl EngagementLevel {
    /// Coerce a free-text level to a known variant, defaulting to medium
    #[must_use]
    pub fn coerce(level: &str) -> Self {
        match level.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }

    /// The lowercase wire form of this level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EngagementLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err("Invalid engagement level"),
        }
    }
}

impl<'de> Deserialize<'de> for EngagementLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map_or_else(Self::default, Self::coerce))
    }
}
