pub mod classify;
pub mod combine;
pub mod dominant;
pub mod label;
pub mod objective;
pub mod timing;
pub mod traits;
pub mod weighted;

use crate::error::Result;
use crate::types::config::{
    ProcessConfig, DEFAULT_MULTIPLE_CHOICE_WEIGHT, DEFAULT_OPINION_WEIGHT,
};
use crate::types::scoring::{Diagnostics, ScoreResult, TraitSummary};
use crate::types::snapshot::{AssessmentSnapshot, Stage};
use std::collections::HashSet;

/// Scores one candidate snapshot.
///
/// Pure: no I/O and no state kept between calls, so the same snapshot and
/// configuration always produce the same result. Contract violations abort
/// with [`crate::error::AssessError::InconsistentInput`] and no partial result.
pub fn compute_assessment(
    snapshot: &AssessmentSnapshot,
    process: Option<&ProcessConfig>,
) -> Result<ScoreResult> {
    let (objective_weight, opinion_weight) = process
        .map(ProcessConfig::combiner_weights)
        .unwrap_or((DEFAULT_MULTIPLE_CHOICE_WEIGHT, DEFAULT_OPINION_WEIGHT));
    let weights = combine::normalize_weights(objective_weight, opinion_weight)?;
    traits::check_weights(snapshot, process)?;
    let classified = classify::classify(snapshot)?;

    let objective = objective::score_objective(&classified.objective, &snapshot.stages);

    let aggregation = traits::aggregate_traits(&classified.preference, process);
    let max_weights = weighted::group_max_weights(&aggregation.records, process);
    let records = weighted::apply_weighted_scores(aggregation.records, &max_weights);
    let opinion_score = weighted::opinion_score(&records);
    let groups = dominant::group_summaries(
        &records,
        &aggregation.group_counts,
        &max_weights,
        process,
    );
    let dominant = dominant::global_dominant(&records);

    let overall = combine::combine(
        (!classified.objective.is_empty()).then_some(objective.accuracy),
        (!records.is_empty()).then_some(opinion_score),
        &weights,
    );
    let timing = timing::aggregate_timing(&classified.all, &snapshot.stages);

    let diagnostics = Diagnostics {
        unrecognized_question_types: classified.unrecognized,
        unresolved_traits: aggregation.unresolved,
        derived_trait_labels: aggregation.derived,
        conflicting_trait_weights: aggregation.conflicting_weights,
        defaulted_time_values: timing.defaulted_values,
        weight_fallback: weights.fallback_applied,
    };

    tracing::debug!(
        candidate = %snapshot.candidate_id,
        accuracy = objective.accuracy,
        opinion_score,
        overall,
        "assessment scored"
    );

    Ok(ScoreResult {
        candidate_id: snapshot.candidate_id.clone(),
        objective,
        traits: TraitSummary {
            total_responses: aggregation.total_responses,
            records,
            groups,
            dominant,
            opinion_score,
        },
        overall,
        weights,
        timing,
        diagnostics,
    })
}

/// One-decimal rounding used for every reported percentage.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole` as a rounded percentage; a zero denominator yields `0`.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round1(part as f64 / whole as f64 * 100.0).clamp(0.0, 100.0)
}

/// Distinct stage ids in report order with their display names.
///
/// Known stages sort by `order`, then by their position in `stages`; stages
/// missing from `stages` follow in discovery order and are named by id.
pub(crate) fn stage_sequence<'a>(
    stages: &'a [Stage],
    discovered: impl IntoIterator<Item = &'a str>,
) -> Vec<(&'a str, &'a str)> {
    let mut seen = HashSet::new();
    let mut sequence = discovered
        .into_iter()
        .filter(|stage_id| seen.insert(*stage_id))
        .enumerate()
        .map(|(discovery, stage_id)| {
            match stages.iter().position(|stage| stage.id == stage_id) {
                Some(position) => {
                    let stage = &stages[position];
                    ((0, stage.order, position), stage_id, stage.name.as_str())
                }
                None => ((1, 0, discovery), stage_id, stage_id),
            }
        })
        .collect::<Vec<_>>();
    sequence.sort_by_key(|(key, _, _)| *key);
    sequence
        .into_iter()
        .map(|(_, stage_id, name)| (stage_id, name))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::types::snapshot::{AnswerOption, Question, QuestionKind, Response, Stage};

    pub fn stage(id: &str, name: &str, order: u32) -> Stage {
        Stage {
            id: id.to_string(),
            name: name.to_string(),
            order,
        }
    }

    /// Objective question with a `right` and a `wrong` option.
    pub fn objective_question(id: &str, stage_id: &str) -> Question {
        Question {
            id: id.to_string(),
            stage_id: stage_id.to_string(),
            kind: QuestionKind::Objective,
            text: String::new(),
            options: [("right", true), ("wrong", false)]
                .into_iter()
                .map(|(option_id, is_correct)| AnswerOption {
                    id: option_id.to_string(),
                    text: String::new(),
                    is_correct: Some(is_correct),
                    trait_name: None,
                    weight: None,
                    group_id: None,
                })
                .collect(),
        }
    }

    pub fn preference_question(
        id: &str,
        stage_id: &str,
        options: &[(&str, Option<&str>, Option<f64>)],
    ) -> Question {
        Question {
            id: id.to_string(),
            stage_id: stage_id.to_string(),
            kind: QuestionKind::Preference,
            text: String::new(),
            options: options
                .iter()
                .map(|(option_id, trait_name, weight)| AnswerOption {
                    id: option_id.to_string(),
                    text: String::new(),
                    is_correct: None,
                    trait_name: trait_name.map(str::to_string),
                    weight: *weight,
                    group_id: None,
                })
                .collect(),
        }
    }

    pub fn response(question_id: &str, option_id: Option<&str>) -> Response {
        Response {
            candidate_id: "cand".to_string(),
            question_id: question_id.to_string(),
            option_id: option_id.map(str::to_string),
            time_spent_secs: None,
            is_correct: None,
            answered_at: None,
        }
    }
}
