//! Effort estimate value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rough effort bucket for a task, as suggested by the AI analysis
///
/// The analysis prompt defines the buckets as: high (> 1 week),
/// medium (1-3 days), low (< 1 day). Unrecognized estimates coerce to
/// [`EffortEstimate::Medium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EffortEstimate {
    /// Less than a day of work
    Low,
    /// One to three days of work
    #[default]
    Medium,
    /// More than a week of work
    High,
}

impl EffortEstimate {
    /// Coerce a free-text estimate to a known variant, defaulting to medium
    #[must_use]
    pub fn coerce(estimate: &str) -> Self {
        match estimate.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    /// Complexity score derived from the estimate
    ///
    /// Lower effort means a lower complexity score; the composite priority
    /// calculation inverts this so quick wins rank higher.
    #[must_use]
    pub const fn complexity(self) -> f64 {
        match self {
            Self::Low => 0.2,
            Self::Medium => 0.5,
            Self::High => 0.8,
        }
    }

    /// The lowercase wire form of this estimate
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for EffortEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for EffortEstimate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map_or_else(Self::default, Self::coerce))
    }
}
