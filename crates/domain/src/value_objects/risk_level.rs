//! Risk level value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk classification attached to an AI task analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Likely to block other work or slip
    High,
    /// Ordinary delivery risk
    #[default]
    Medium,
    /// Safe, well-understood work
    Low,
}

impl RiskLevel {
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

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map_or_else(Self::default, Self::coerce))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_medium() {
        assert_eq!(RiskLevel::default(), RiskLevel::Medium);
    }

    #[test]
    fn coerce_handles_case_and_garbage() {
        assert_eq!(RiskLevel::coerce("HIGH"), RiskLevel::High);
        assert_eq!(RiskLevel::coerce("catastrophic"), RiskLevel::Medium);
    }

    #[test]
    fn serialization_roundtrip() {
        for level in [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low] {
            let json = serde_json::to_string(&level).unwrap();
            let parsed: RiskLevel = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, level);
        }
    }
}
