//! Priority level value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable priority bucket for a scored task
///
/// Buckets partition the composite score range [0, 1] without gaps or
/// overlap, so every score maps to exactly one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PriorityLevel {
    /// Composite score >= 0.8
    Critical,
    /// Composite score >= 0.6
    High,
    /// Composite score >= 0.4
    #[default]
    Medium,
    /// Composite score >= 0.2
    Low,
    /// Composite score < 0.2
    Minimal,
}

impl PriorityLevel {
    /// Bucket a composite priority score into a level
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::Critical
        } else if score >= 0.6 {
            Self::High
        } else if score >= 0.4 {
            Self::Medium
        } else if score >= 0.2 {
            Self::Low
        } else {
            Self::Minimal
        }
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Minimal => "Minimal",
        }
    }

    /// Check if this level warrants immediate attention
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }

    /// All levels in descending order (highest first)
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Critical,
            Self::High,
            Self::Medium,
            Self::Low,
            Self::Minimal,
        ]
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
