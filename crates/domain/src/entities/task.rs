//! Task records and their prioritization results

use serde::{Deserialize, Serialize};

use crate::value_objects::{
    EffortEstimate, PriorityLevel, RiskLevel, SentimentLabel, UnitScore,
};

fn default_half() -> UnitScore {
    UnitScore::HALF
}

fn default_reasoning() -> String {
    "Standard priority calculation".to_string()
}

/// A task as captured from a meeting or task list
///
/// Owned by the caller; prioritization consumes records and returns them
/// embedded in [`PrioritizedTask`] with every original field intact.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Free-text task description
    pub task: String,
    /// Person the task is assigned to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Free-text status (the source systems do not agree on a vocabulary)
    #[serde(default)]
    pub status: String,
    /// Due date as an ISO `YYYY-MM-DD` string; unparseable dates are treated
    /// the same as absent ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
}

impl TaskRecord {
    /// Create a record from a description alone
    #[must_use]
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            ..Self::default()
        }
    }

    /// Set the due date
    #[must_use]
    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }

    /// Set the assignee
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}

/// Per-task analysis produced by the AI backend
///
/// Every field is lenient: absent or malformed values take their documented
/// defaults, so a partially-filled analysis still contributes what it has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskAnalysis {
    /// AI-suggested priority, 0.0 (lowest) to 1.0 (highest)
    pub priority_score: UnitScore,
    /// Business impact, 0.0 (none) to 1.0 (critical)
    pub business_impact: UnitScore,
    /// Rough effort bucket
    pub effort_estimate: EffortEstimate,
    /// Suggested assignee, if the AI had one
    pub recommended_assignee: Option<String>,
    /// Indices of tasks this one depends on, as reported by the AI
    pub dependencies: Vec<String>,
    /// Short explanation of the suggested priority
    pub reasoning: String,
    /// Factors that make the task urgent
    pub urgency_factors: Vec<String>,
    /// Delivery risk classification
    pub risk_level: RiskLevel,
}

impl Default for TaskAnalysis {
    fn default() -> Self {
        Self {
            priority_score: default_half(),
            business_impact: default_half(),
            effort_estimate: EffortEstimate::default(),
            recommended_assignee: None,
            dependencies: Vec::new(),
            reasoning: default_reasoning(),
            urgency_factors: Vec::new(),
            risk_level: RiskLevel::default(),
        }
    }
}

/// A task enriched with priority scores and ranking
///
/// The original [`TaskRecord`] is flattened into the serialized form, so a
/// prioritized task is a strict superset of its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedTask {
    /// The caller's original record, untouched
    #[serde(flatten)]
    pub record: TaskRecord,
    /// Composite priority score in [0, 1], rounded to three decimals
    pub priority_score: UnitScore,
    /// Human-readable bucket for the composite score
    pub priority_level: PriorityLevel,
    /// Dense 1-based rank; ties keep the input order
    pub priority_rank: usize,
    /// Due-date driven urgency factor
    pub urgency_score: UnitScore,
    /// Keyword- and impact-driven importance factor
    pub importance_score: UnitScore,
    /// Effort-derived complexity factor
    pub complexity_score: UnitScore,
    /// The AI sub-result this enrichment drew from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<TaskAnalysis>,
    /// Effort bucket (medium when the AI offered none)
    pub effort_estimate: EffortEstimate,
    /// AI-suggested assignee, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_assignee: Option<String>,
    /// Explanation of the priority decision
    pub priority_reasoning: String,
}

/// Read-only situational context for prioritization
///
/// The sentiment field is the only coupling point with the sentiment
/// engine: callers may feed the overall label of a recent meeting in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityContext {
    /// Overall sentiment of the surrounding meeting, if known
    pub sentiment: Option<SentimentLabel>,
    /// Free-text description of current team workload
    pub team_workload: Option<String>,
    /// Name of the sprint the team is in
    pub current_sprint: Option<String>,
    /// Deadlines coming up soon
    pub upcoming_deadlines: Vec<String>,
}
