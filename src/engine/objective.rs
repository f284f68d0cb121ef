use super::classify::Scored;
use super::{percent, stage_sequence};
use crate::types::scoring::{ObjectiveSummary, StageBreakdown};
use crate::types::snapshot::Stage;
use std::collections::HashMap;

/// Correctness comes from the response flag, then from the selected option.
pub fn is_correct(scored: &Scored<'_>) -> bool {
    scored.response.is_correct.unwrap_or_else(|| {
        scored
            .response
            .option_id
            .as_deref()
            .and_then(|option_id| scored.question.option(option_id))
            .and_then(|option| option.is_correct)
            .unwrap_or(false)
    })
}

pub fn score_objective(responses: &[Scored<'_>], stages: &[Stage]) -> ObjectiveSummary {
    let total = responses.len();
    let correct = responses.iter().filter(|scored| is_correct(scored)).count();

    let tallies = responses
        .iter()
        .fold(HashMap::<&str, (usize, usize)>::new(), |mut acc, scored| {
            let tally = acc.entry(scored.question.stage_id.as_str()).or_default();
            tally.0 += 1;
            if is_correct(scored) {
                tally.1 += 1;
            }
            acc
        });

    let discovered = responses
        .iter()
        .map(|scored| scored.question.stage_id.as_str());
    let breakdown = stage_sequence(stages, discovered)
        .into_iter()
        .filter_map(|(stage_id, stage_name)| {
            let (stage_total, stage_correct) = tallies.get(stage_id).copied()?;
            let line = StageBreakdown {
                stage_id: stage_id.to_string(),
                stage_name: stage_name.to_string(),
                total: stage_total,
                correct: stage_correct,
                incorrect: stage_total - stage_correct,
                accuracy: percent(stage_correct, stage_total),
            };
            tracing::debug!(
                stage = %line.stage_id,
                total = line.total,
                correct = line.correct,
                accuracy = line.accuracy,
                "stage objective summary"
            );
            Some(line)
        })
        .collect();

    ObjectiveSummary {
        total,
        correct,
        incorrect: total - correct,
        accuracy: percent(correct, total),
        stages: breakdown,
    }
}
