use super::classify::Scored;
use super::label::resolve_label;
use super::percent;
use crate::error::{AssessError, Result};
use crate::types::config::ProcessConfig;
use crate::types::scoring::TraitRecord;
use crate::types::snapshot::{AssessmentSnapshot, QuestionKind};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitAggregation {
    /// Sorted by `percentage` descending; ties keep discovery order.
    pub records: Vec<TraitRecord>,
    pub total_responses: usize,
    pub group_counts: HashMap<String, usize>,
    pub unresolved: usize,
    pub derived: usize,
    /// Selections whose option weight disagreed with the weight already in use.
    pub conflicting_weights: usize,
}

#[derive(Debug, Clone)]
struct Tally {
    name: String,
    group_id: Option<String>,
    weight: f64,
    configured_weight: bool,
    count: usize,
}

/// Every option weight and configured trait weight must be a finite,
/// non-negative number.
pub fn check_weights(
    snapshot: &AssessmentSnapshot,
    process: Option<&ProcessConfig>,
) -> Result<()> {
    let option_weights = snapshot
        .questions
        .iter()
        .filter(|question| question.kind == QuestionKind::Preference)
        .flat_map(|question| {
            question
                .options
                .iter()
                .map(move |option| {
                    (
                        format!("option '{}' of question '{}'", option.id, question.id),
                        option.weight,
                    )
                })
        });
    let configured_weights = process
        .into_iter()
        .flat_map(|cfg| cfg.trait_groups.iter())
        .flat_map(|group| {
            group
                .traits
                .iter()
                .map(move |entry| {
                    (
                        format!("trait '{}' in group '{}'", entry.name, group.id),
                        entry.weight,
                    )
                })
        });

    for (owner, weight) in option_weights.chain(configured_weights) {
        if let Some(weight) = weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AssessError::InconsistentInput(format!(
                    "{owner} has invalid weight {weight}"
                )));
            }
        }
    }
    Ok(())
}

pub fn aggregate_traits(
    responses: &[Scored<'_>],
    process: Option<&ProcessConfig>,
) -> TraitAggregation {
    let placements = process.map(ProcessConfig::trait_index).unwrap_or_default();

    let mut tallies: Vec<Tally> = Vec::new();
    let mut positions = HashMap::<String, usize>::new();
    let mut unresolved = 0;
    let mut derived = 0;
    let mut conflicting_weights = 0;

    for scored in responses {
        let Some(option) = scored
            .response
            .option_id
            .as_deref()
            .and_then(|option_id| scored.question.option(option_id))
        else {
            tracing::warn!(
                question = %scored.question.id,
                "preference response has no resolvable option"
            );
            unresolved += 1;
            continue;
        };
        let Some(label) = resolve_label(option) else {
            tracing::warn!(
                question = %scored.question.id,
                option = %option.id,
                "preference option has no trait label and no text to derive one"
            );
            unresolved += 1;
            continue;
        };
        if label.derived {
            derived += 1;
        }

        match positions.get(&label.name) {
            Some(&position) => {
                let tally = &mut tallies[position];
                tally.count += 1;
                if let Some(weight) = option.weight {
                    if !tally.configured_weight && weight != tally.weight {
                        tracing::warn!(
                            trait_name = %tally.name,
                            option = %option.id,
                            kept = tally.weight,
                            ignored = weight,
                            "trait selected through options with different weights; keeping the first"
                        );
                        conflicting_weights += 1;
                    }
                }
            }
            None => {
                let placement = placements.get(label.name.as_str());
                let group_id = placement
                    .map(|placement| placement.group_id.to_string())
                    .or_else(|| {
                        option
                            .group_id
                            .as_deref()
                            .map(str::trim)
                            .filter(|group_id| !group_id.is_empty())
                            .map(str::to_string)
                    });
                let configured = placement.and_then(|placement| placement.weight);
                let weight = configured.or(option.weight).unwrap_or(0.0);
                positions.insert(label.name.clone(), tallies.len());
                tallies.push(Tally {
                    name: label.name,
                    group_id,
                    weight,
                    configured_weight: configured.is_some(),
                    count: 1,
                });
            }
        }
    }

    let total_responses: usize = tallies.iter().map(|tally| tally.count).sum();
    let group_counts = tallies.iter().fold(HashMap::new(), |mut acc, tally| {
        if let Some(group_id) = &tally.group_id {
            *acc.entry(group_id.clone()).or_insert(0) += tally.count;
        }
        acc
    });

    let mut records = tallies
        .into_iter()
        .map(|tally| {
            let global_percentage = percent(tally.count, total_responses);
            let group_percentage = tally
                .group_id
                .as_ref()
                .and_then(|group_id| group_counts.get(group_id))
                .map(|group_total| percent(tally.count, *group_total))
                .unwrap_or(0.0);
            let percentage = if tally.group_id.is_some() {
                group_percentage
            } else {
                global_percentage
            };
            TraitRecord {
                name: tally.name,
                group_id: tally.group_id,
                count: tally.count,
                weight: tally.weight,
                global_percentage,
                group_percentage,
                percentage,
                weighted_score: 0.0,
            }
        })
        .collect::<Vec<_>>();
    records.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    TraitAggregation {
        records,
        total_responses,
        group_counts,
        unresolved,
        derived,
        conflicting_weights,
    }
}
