//! Priority recommendations

use serde::{Deserialize, Serialize};

/// Workload guidance derived from a prioritized task batch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriorityRecommendations {
    /// Concrete suggestions (focus areas, overdue work, batch size)
    pub recommendations: Vec<String>,
    /// Observations about the overall workload
    pub insights: Vec<String>,
    /// Counts by priority bucket
    pub task_distribution: TaskDistribution,
}

/// Distribution of a task batch across the buckets that drive guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskDistribution {
    /// Tasks bucketed Critical
    pub critical: usize,
    /// Tasks bucketed High
    pub high: usize,
    /// Tasks whose urgency marks them overdue
    pub overdue: usize,
    /// Size of the batch
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_distribution_is_zeroed() {
        let dist = TaskDistribution::default();
        assert_eq!(dist.critical, 0);
        assert_eq!(dist.high, 0);
        assert_eq!(dist.overdue, 0);
        assert_eq!(dist.total, 0);
    }
}
