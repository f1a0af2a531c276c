//! Deterministic priority factors and the composite score
//!
//! Every factor lives in `[0, 1]`. The composite is a weighted sum with
//! complexity inverted, so quick wins float upward instead of sinking.

use chrono::NaiveDate;
use domain::entities::TaskRecord;
use domain::value_objects::EffortEstimate;

/// Weight of the due-date urgency factor.
pub const URGENCY_WEIGHT: f64 = 0.25;
/// Weight of the keyword/business-impact importance factor.
pub const IMPORTANCE_WEIGHT: f64 = 0.25;
/// Weight of the AI-reported business impact.
pub const BUSINESS_IMPACT_WEIGHT: f64 = 0.20;
/// Weight of the AI-reported priority score.
pub const AI_PRIORITY_WEIGHT: f64 = 0.15;
/// Weight of the blocking-other-tasks factor.
pub const DEPENDENCY_WEIGHT: f64 = 0.10;
/// Weight of the inverted complexity factor.
pub const COMPLEXITY_WEIGHT: f64 = 0.05;

/// Format accepted for task due dates.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Urgency of tasks without a parseable due date.
const DEFAULT_URGENCY: f64 = 0.3;

const HIGH_IMPORTANCE_KEYWORDS: &[&str] = &[
    "critical", "urgent", "blocker", "security", "bug", "fix", "production", "client", "customer",
    "revenue", "launch", "release", "deadline",
];

const MEDIUM_IMPORTANCE_KEYWORDS: &[&str] = &[
    "feature",
    "enhancement",
    "improvement",
    "optimization",
    "refactor",
    "documentation",
    "testing",
    "review",
];

const LOW_IMPORTANCE_KEYWORDS: &[&str] =
    &["cleanup", "minor", "nice to have", "future", "research", "investigate"];

/// The six factors feeding the composite priority score.
#[derive(Debug, Clone, Copy)]
pub struct PriorityFactors {
    pub urgency: f64,
    pub importance: f64,
    pub complexity: f64,
    pub dependency: f64,
    pub ai_priority: f64,
    pub business_impact: f64,
}

impl PriorityFactors {
    /// Weighted composite of all six factors, clamped to `[0, 1]` and
    /// rounded to three decimals.
    #[must_use]
    pub fn composite(self) -> f64 {
        let quick_win_bonus = 1.0 - self.complexity;
        let score = self.urgency * URGENCY_WEIGHT
            + self.importance * IMPORTANCE_WEIGHT
            + self.business_impact * BUSINESS_IMPACT_WEIGHT
            + self.ai_priority * AI_PRIORITY_WEIGHT
            + self.dependency * DEPENDENCY_WEIGHT
            + quick_win_bonus * COMPLEXITY_WEIGHT;
        round3(score.clamp(0.0, 1.0))
    }
}

/// Urgency relative to an explicit reference date.
///
/// Ladder: overdue 1.0, due today 0.95, tomorrow 0.9, within 3 days 0.8,
/// within a week 0.6, within two weeks 0.4, later 0.2. Missing or
/// unparseable due dates fall back to a default low urgency.
#[must_use]
pub fn urgency_score_on(due: Option<&str>, today: NaiveDate) -> f64 {
    let Some(due) = due else {
        return DEFAULT_URGENCY;
    };
    let Ok(due_date) = NaiveDate::parse_from_str(due, DUE_DATE_FORMAT) else {
        return DEFAULT_URGENCY;
    };

    match (due_date - today).num_days() {
        i64::MIN..=-1 => 1.0,
        0 => 0.95,
        1 => 0.9,
        2..=3 => 0.8,
        4..=7 => 0.6,
        8..=14 => 0.4,
        _ => 0.2,
    }
}

/// Importance from the AI business impact plus description keywords.
///
/// Each matched keyword shifts the score and every shift clamps, so
/// stacked high-importance keywords saturate at 1.0 rather than overflow.
/// Matching is case-insensitive substring containment, which lets a
/// multi-word phrase like "nice to have" count as one keyword.
#[must_use]
pub fn importance_score(task: &TaskRecord, business_impact: f64) -> f64 {
    let description = task.task.to_lowercase();
    let mut score = business_impact;

    for keyword in HIGH_IMPORTANCE_KEYWORDS {
        if description.contains(keyword) {
            score = (score + 0.2).min(1.0);
        }
    }
    for keyword in MEDIUM_IMPORTANCE_KEYWORDS {
        if description.contains(keyword) {
            score = (score + 0.1).min(1.0);
        }
    }
    for keyword in LOW_IMPORTANCE_KEYWORDS {
        if description.contains(keyword) {
            score = (score - 0.1).max(0.0);
        }
    }

    score
}

/// Complexity from the effort estimate; higher means harder.
#[must_use]
pub const fn complexity_score(estimate: EffortEstimate) -> f64 {
    estimate.complexity()
}

/// How strongly the task at `index` appears to block the rest of the batch.
///
/// A task's first three description words are matched as substrings
/// against every other description; the hit count is normalized by the
/// batch size. A heuristic, not a dependency graph. Single-task batches
/// score zero.
#[must_use]
pub fn dependency_score(index: usize, tasks: &[TaskRecord]) -> f64 {
    if tasks.len() <= 1 || index >= tasks.len() {
        return 0.0;
    }

    let description = tasks[index].task.to_lowercase();
    let head_words: Vec<&str> = description.split_whitespace().take(3).collect();

    let dependents = tasks
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .filter(|(_, other)| {
            let other_description = other.task.to_lowercase();
            head_words.iter().any(|word| other_description.contains(word))
        })
        .count();

    dependents as f64 / (tasks.len() - 1) as f64
}

/// Round to three decimal places.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn weights_sum_to_one() {
        let total = URGENCY_WEIGHT
            + IMPORTANCE_WEIGHT
            + BUSINESS_IMPACT_WEIGHT
            + AI_PRIORITY_WEIGHT
            + DEPENDENCY_WEIGHT
            + COMPLEXITY_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn urgency_ladder() {
        let today = date("2025-06-15");
        let cases = [
            (Some("2025-06-14"), 1.0),
            (Some("2025-06-15"), 0.95),
            (Some("2025-06-16"), 0.9),
            (Some("2025-06-18"), 0.8),
            (Some("2025-06-22"), 0.6),
            (Some("2025-06-29"), 0.4),
            (Some("2025-07-20"), 0.2),
            (Some("not a date"), 0.3),
            (None, 0.3),
        ];
        for (due, expected) in cases {
            assert!(
                (urgency_score_on(due, today) - expected).abs() < f64::EPSILON,
                "due {due:?} expected {expected}"
            );
        }
    }

    #[test]
    fn importance_compounds_and_saturates() {
        let task = TaskRecord::new("Fix critical production bug");
        // Four high-importance keywords, each +0.2 from a 0.5 base, clamped.
        assert!((importance_score(&task, 0.5) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn importance_discounts_low_value_phrases() {
        let task = TaskRecord::new("Minor cleanup, nice to have");
        let score = importance_score(&task, 0.5);
        assert!((score - 0.2).abs() < 1e-9);
    }

    #[test]
    fn importance_matches_case_insensitively() {
        let task = TaskRecord::new("URGENT: call the Client");
        let score = importance_score(&task, 0.5);
        // "urgent" and "client" both match.
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn importance_floor_is_zero() {
        let task = TaskRecord::new("future research cleanup minor investigate");
        assert!(importance_score(&task, 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn complexity_maps_effort_levels() {
        assert!((complexity_score(EffortEstimate::Low) - 0.2).abs() < f64::EPSILON);
        assert!((complexity_score(EffortEstimate::Medium) - 0.5).abs() < f64::EPSILON);
        assert!((complexity_score(EffortEstimate::High) - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn dependency_counts_shared_head_words() {
        let tasks = vec![
            TaskRecord::new("deploy api gateway"),
            TaskRecord::new("write docs for the api"),
            TaskRecord::new("unrelated payroll work"),
        ];
        // "api" appears in task 1 but not task 2: one dependent of two.
        assert!((dependency_score(0, &tasks) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn dependency_is_zero_for_singleton_batch() {
        let tasks = vec![TaskRecord::new("only task")];
        assert!(dependency_score(0, &tasks).abs() < f64::EPSILON);
    }

    #[test]
    fn composite_known_value() {
        let factors = PriorityFactors {
            urgency: 1.0,
            importance: 0.8,
            complexity: 0.2,
            dependency: 0.0,
            ai_priority: 0.5,
            business_impact: 0.5,
        };
        // 0.25 + 0.2 + 0.1 + 0.075 + 0.0 + 0.04 = 0.665
        assert!((factors.composite() - 0.665).abs() < f64::EPSILON);
    }

    #[test]
    fn composite_rounds_to_three_decimals() {
        let factors = PriorityFactors {
            urgency: 1.0 / 3.0,
            importance: 0.0,
            complexity: 1.0,
            dependency: 0.0,
            ai_priority: 0.0,
            business_impact: 0.0,
        };
        assert!((factors.composite() - 0.083).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn composite_stays_in_unit_range(
            urgency in 0.0f64..=1.0,
            importance in 0.0f64..=1.0,
            complexity in 0.0f64..=1.0,
            dependency in 0.0f64..=1.0,
            ai_priority in 0.0f64..=1.0,
            business_impact in 0.0f64..=1.0,
        ) {
            let factors = PriorityFactors {
                urgency, importance, complexity, dependency, ai_priority, business_impact,
            };
            let score = factors.composite();
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn urgency_never_leaves_unit_range(days in -400i64..400) {
            let today = date("2025-06-15");
            let due = today + chrono::Duration::days(days);
            let score = urgency_score_on(Some(&due.format("%Y-%m-%d").to_string()), today);
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
