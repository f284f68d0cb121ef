use super::round1;
use crate::types::config::ProcessConfig;
use crate::types::scoring::{Score, TraitRecord};
use std::collections::HashMap;

/// Normalization ceiling for traits outside any group.
pub const UNGROUPED_MAX_WEIGHT: f64 = 5.0;

/// Normalization ceiling per group.
///
/// Groups listed in the process config take the heaviest configured trait,
/// picked or not. Every group also covers the weights of the traits the
/// candidate picked, which is all a group known only from option data has.
pub fn group_max_weights(
    records: &[TraitRecord],
    process: Option<&ProcessConfig>,
) -> HashMap<String, f64> {
    let configured = process
        .into_iter()
        .flat_map(|cfg| cfg.trait_groups.iter())
        .flat_map(|group| {
            group
                .traits
                .iter()
                .filter_map(move |entry| Some((group.id.as_str(), entry.weight?)))
        });
    let observed = records.iter().filter_map(|record| {
        record
            .group_id
            .as_deref()
            .map(|group_id| (group_id, record.weight))
    });

    configured
        .chain(observed)
        .fold(HashMap::new(), |mut acc, (group_id, weight)| {
            let max = acc.entry(group_id.to_string()).or_insert(0.0_f64);
            *max = max.max(weight);
            acc
        })
}

pub fn weighted_score(weight: f64, max_weight: f64) -> Score {
    if max_weight <= 0.0 {
        return 0.0;
    }
    round1(weight / max_weight * 100.0).clamp(0.0, 100.0)
}

pub fn apply_weighted_scores(
    records: Vec<TraitRecord>,
    max_weights: &HashMap<String, f64>,
) -> Vec<TraitRecord> {
    records
        .into_iter()
        .map(|record| {
            let max_weight = match &record.group_id {
                Some(group_id) => max_weights.get(group_id).copied().unwrap_or(0.0),
                None => UNGROUPED_MAX_WEIGHT,
            };
            TraitRecord {
                weighted_score: weighted_score(record.weight, max_weight),
                ..record
            }
        })
        .collect()
}

pub fn opinion_score(records: &[TraitRecord]) -> Score {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|record| record.weighted_score).sum();
    round1(sum / records.len() as f64).clamp(0.0, 100.0)
}
