use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Percent-scale value rounded to one decimal, always within `[0, 100]`.
pub type Score = f64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub candidate_id: String,
    pub objective: ObjectiveSummary,
    pub traits: TraitSummary,
    pub overall: Score,
    pub weights: CombinerWeights,
    pub timing: TimingSummary,
    pub diagnostics: Diagnostics,
}

impl ScoreResult {
    pub fn meets(&self, passing_score: f64) -> bool {
        self.overall >= passing_score
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectiveSummary {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub accuracy: Score,
    pub stages: Vec<StageBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageBreakdown {
    pub stage_id: String,
    pub stage_name: String,
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub accuracy: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitRecord {
    pub name: String,
    pub group_id: Option<String>,
    pub count: usize,
    pub weight: f64,
    pub global_percentage: Score,
    pub group_percentage: Score,
    /// Group-relative when the trait is grouped, global otherwise.
    pub percentage: Score,
    pub weighted_score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub group_id: String,
    pub name: String,
    pub response_count: usize,
    pub max_weight: f64,
    /// Single leader for map-keyed consumers; first discovered wins a tie.
    pub dominant: String,
    pub dominant_percentage: Score,
    /// Every trait sharing the leading percentage, in discovery order.
    pub ties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TraitSummary {
    pub total_responses: usize,
    pub records: Vec<TraitRecord>,
    pub groups: BTreeMap<String, GroupSummary>,
    pub dominant: Vec<String>,
    pub opinion_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CombinerWeights {
    pub objective: f64,
    pub opinion: f64,
    pub fallback_applied: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimingSummary {
    pub total_time_secs: f64,
    pub avg_time_per_question: f64,
    pub responses: usize,
    pub defaulted_values: usize,
    pub stages: Vec<StageTiming>,
    pub first_answered_at: Option<DateTime<Utc>>,
    pub last_answered_at: Option<DateTime<Utc>>,
    pub span_secs: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageTiming {
    pub stage_id: String,
    pub total_time_secs: f64,
    pub responses: usize,
}

/// Counters for every degraded path taken while scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagnostics {
    pub unrecognized_question_types: usize,
    pub unresolved_traits: usize,
    pub derived_trait_labels: usize,
    pub conflicting_trait_weights: usize,
    pub defaulted_time_values: usize,
    pub weight_fallback: bool,
}
