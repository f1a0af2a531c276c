//! Task prioritization
//!
//! Ranks a task batch by a weighted composite of deterministic factors
//! (due-date urgency, keyword importance, complexity, dependencies) and
//! AI-suggested factors. The AI contribution is strictly additive: when
//! the backend is missing or its response unusable, every AI factor takes
//! its neutral default and the deterministic factors carry the ranking.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, instrument};

use domain::entities::{
    PrioritizedTask, PriorityContext, PriorityRecommendations, TaskAnalysis, TaskDistribution,
    TaskRecord,
};
use domain::value_objects::{EffortEstimate, PriorityLevel, SentimentLabel, UnitScore};

use crate::error::ApplicationError;
use crate::llm_json::extract_json;
use crate::ports::InferencePort;
use crate::services::scoring::{self, PriorityFactors};

/// Task prioritization engine with a deterministic core
pub struct PriorityEngine {
    inference: Option<Arc<dyn InferencePort>>,
}

impl PriorityEngine {
    /// Create an engine backed by an inference port
    #[must_use]
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self {
            inference: Some(inference),
        }
    }

    /// Create an engine that ranks with deterministic factors only
    #[must_use]
    pub const fn without_inference() -> Self {
        Self { inference: None }
    }

    /// Prioritize a batch of tasks, highest priority first.
    ///
    /// Consumes the records and returns each one embedded in a
    /// [`PrioritizedTask`] with its factor scores, bucket, and a dense
    /// 1-based rank. Ties keep their input order. Cannot fail: an empty
    /// batch yields an empty result and AI trouble degrades to the
    /// deterministic factors.
    #[instrument(skip(self, tasks, context), fields(task_count = tasks.len()))]
    pub async fn prioritize_tasks(
        &self,
        tasks: Vec<TaskRecord>,
        context: Option<&PriorityContext>,
    ) -> Vec<PrioritizedTask> {
        if tasks.is_empty() {
            return Vec::new();
        }

        let analyses = self.batch_analysis(&tasks, context).await;
        let dependency_scores: Vec<f64> = (0..tasks.len())
            .map(|index| scoring::dependency_score(index, &tasks))
            .collect();
        let today = Utc::now().date_naive();

        let mut prioritized: Vec<PrioritizedTask> = tasks
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let analysis = analyses.get(&index).cloned();
                build_prioritized(record, analysis, dependency_scores[index], today)
            })
            .collect();

        // Stable sort keeps input order for equal scores.
        prioritized.sort_by(|a, b| {
            b.priority_score
                .value()
                .partial_cmp(&a.priority_score.value())
                .unwrap_or(Ordering::Equal)
        });
        for (index, task) in prioritized.iter_mut().enumerate() {
            task.priority_rank = index + 1;
        }

        prioritized
    }

    /// Per-task AI analyses keyed by position in the batch.
    ///
    /// Out-of-range or non-numeric keys in the response are dropped
    /// rather than failing the batch.
    async fn batch_analysis(
        &self,
        tasks: &[TaskRecord],
        context: Option<&PriorityContext>,
    ) -> HashMap<usize, TaskAnalysis> {
        let Some(inference) = &self.inference else {
            debug!("no inference backend configured, ranking with deterministic factors");
            return HashMap::new();
        };

        match ai_batch_analysis(inference.as_ref(), tasks, context).await {
            Ok(analyses) => analyses,
            Err(err) => {
                error!(error = %err, "AI task analysis failed, ranking with deterministic factors");
                HashMap::new()
            }
        }
    }
}

fn build_prioritized(
    record: TaskRecord,
    analysis: Option<TaskAnalysis>,
    dependency: f64,
    today: chrono::NaiveDate,
) -> PrioritizedTask {
    let ai_priority = analysis
        .as_ref()
        .map_or(0.5, |a| a.priority_score.value());
    let business_impact = analysis
        .as_ref()
        .map_or(0.5, |a| a.business_impact.value());
    let effort_estimate = analysis
        .as_ref()
        .map_or(EffortEstimate::Medium, |a| a.effort_estimate);

    let urgency = scoring::urgency_score_on(record.due.as_deref(), today);
    let importance = scoring::importance_score(&record, business_impact);
    let complexity = scoring::complexity_score(effort_estimate);

    let factors = PriorityFactors {
        urgency,
        importance,
        complexity,
        dependency,
        ai_priority,
        business_impact,
    };
    let priority_score = factors.composite();

    PrioritizedTask {
        priority_score: UnitScore::clamped(priority_score),
        priority_level: PriorityLevel::from_score(priority_score),
        priority_rank: 0,
        urgency_score: UnitScore::clamped(urgency),
        importance_score: UnitScore::clamped(importance),
        complexity_score: UnitScore::clamped(complexity),
        effort_estimate,
        recommended_assignee: analysis
            .as_ref()
            .and_then(|a| a.recommended_assignee.clone()),
        priority_reasoning: analysis.as_ref().map_or_else(
            || TaskAnalysis::default().reasoning,
            |a| a.reasoning.clone(),
        ),
        ai_analysis: analysis,
        record,
    }
}

async fn ai_batch_analysis(
    inference: &dyn InferencePort,
    tasks: &[TaskRecord],
    context: Option<&PriorityContext>,
) -> Result<HashMap<usize, TaskAnalysis>, ApplicationError> {
    let prompt = priority_prompt(tasks, context);
    let result = inference.generate(&prompt).await?;
    debug!(
        model = %inference.current_model(),
        latency_ms = result.latency_ms,
        "task analysis response received"
    );

    let payload = extract_json(&result.content);
    let keyed: HashMap<String, TaskAnalysis> = serde_json::from_str(payload)
        .map_err(|err| ApplicationError::InvalidResponse(err.to_string()))?;

    Ok(keyed
        .into_iter()
        .filter_map(|(key, analysis)| key.trim().parse::<usize>().ok().map(|i| (i, analysis)))
        .collect())
}

fn priority_prompt(tasks: &[TaskRecord], context: Option<&PriorityContext>) -> String {
    let mut tasks_text = String::new();
    for (index, task) in tasks.iter().enumerate() {
        let _ = write!(
            tasks_text,
            "\nTask {index}:\n- Description: {}\n- Assignee: {}\n- Status: {}\n- Due date: {}\n",
            task.task,
            task.assignee.as_deref().unwrap_or("Unassigned"),
            if task.status.is_empty() {
                "Unknown"
            } else {
                &task.status
            },
            task.due.as_deref().unwrap_or("No due date"),
        );
    }

    let context_info = context.map_or_else(String::new, |context| {
        format!(
            "\nAdditional Context:\n- Meeting sentiment: {}\n- Team workload: {}\n- Current sprint: {}\n- Deadlines approaching: {:?}\n",
            context.sentiment.unwrap_or(SentimentLabel::Neutral),
            context.team_workload.as_deref().unwrap_or("normal"),
            context.current_sprint.as_deref().unwrap_or("unknown"),
            context.upcoming_deadlines,
        )
    });

    format!(
        r#"Analyze these tasks and provide priority recommendations based on business impact, urgency, complexity, and dependencies.
{tasks_text}
{context_info}
For each task, provide analysis in this JSON format:
{{
    "0": {{
        "priority_score": 0.85,
        "business_impact": 0.9,
        "effort_estimate": "high|medium|low",
        "recommended_assignee": "suggested_person_or_null",
        "dependencies": ["task_indices_this_depends_on"],
        "reasoning": "Brief explanation of priority reasoning",
        "urgency_factors": ["factor1", "factor2"],
        "risk_level": "high|medium|low"
    }},
    "1": {{ ... }}
}}

Rules:
1. priority_score: 0.0 (lowest) to 1.0 (highest priority)
2. business_impact: 0.0 (no impact) to 1.0 (critical impact)
3. Consider deadlines, dependencies, team capacity, and strategic importance
4. effort_estimate: high (>1 week), medium (1-3 days), low (<1 day)
5. Identify blockers and dependencies between tasks
6. Output ONLY valid JSON"#
    )
}

/// Workload guidance for an already-prioritized batch.
///
/// Counts the Critical and High buckets plus overdue tasks, and turns
/// them into short actionable recommendations and an average-priority
/// insight. An empty batch yields the empty default.
#[must_use]
pub fn priority_recommendations(prioritized: &[PrioritizedTask]) -> PriorityRecommendations {
    if prioritized.is_empty() {
        return PriorityRecommendations::default();
    }

    let critical = prioritized
        .iter()
        .filter(|t| t.priority_level == PriorityLevel::Critical)
        .count();
    let high = prioritized
        .iter()
        .filter(|t| t.priority_level == PriorityLevel::High)
        .count();
    let overdue = prioritized
        .iter()
        .filter(|t| t.urgency_score.value() >= 1.0)
        .count();

    let mut recommendations = Vec::new();
    if critical > 0 {
        recommendations.push(format!("Focus on {critical} critical tasks first"));
    }
    if overdue > 0 {
        recommendations.push(format!("Address {overdue} overdue tasks immediately"));
    }
    if high > 5 {
        recommendations
            .push("Consider breaking down high-priority tasks into smaller chunks".to_string());
    }

    let average = prioritized
        .iter()
        .map(|t| t.priority_score.value())
        .sum::<f64>()
        / prioritized.len() as f64;

    let mut insights = vec![format!("Average task priority: {average:.2}")];
    if average > 0.7 {
        insights.push("High overall task urgency - consider additional resources".to_string());
    } else if average < 0.3 {
        insights.push("Low overall task urgency - good time for strategic work".to_string());
    }

    PriorityRecommendations {
        recommendations,
        insights,
        task_distribution: TaskDistribution {
            critical,
            high,
            overdue,
            total: prioritized.len(),
        },
    }
}
