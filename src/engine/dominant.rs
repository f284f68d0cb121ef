use crate::types::config::ProcessConfig;
use crate::types::scoring::{GroupSummary, TraitRecord};
use std::collections::{BTreeMap, HashMap};

/// All records sharing the highest `percentage`. Ties are never broken.
pub fn global_dominant(records: &[TraitRecord]) -> Vec<String> {
    let Some(top) = records
        .iter()
        .map(|record| record.percentage)
        .max_by(|a, b| a.total_cmp(b))
    else {
        return Vec::new();
    };
    records
        .iter()
        .filter(|record| record.percentage == top)
        .map(|record| record.name.clone())
        .collect()
}

/// Per-group leader plus its tie set.
///
/// `records` must already be ordered by percentage with ties in discovery
/// order, so the first record seen for a group at the top percentage is the
/// earliest discovered one.
pub fn group_summaries(
    records: &[TraitRecord],
    group_counts: &HashMap<String, usize>,
    max_weights: &HashMap<String, f64>,
    process: Option<&ProcessConfig>,
) -> BTreeMap<String, GroupSummary> {
    let mut groups = BTreeMap::<String, GroupSummary>::new();
    for record in records {
        let Some(group_id) = &record.group_id else {
            continue;
        };
        match groups.get_mut(group_id) {
            Some(summary) => {
                if record.percentage > summary.dominant_percentage {
                    summary.dominant = record.name.clone();
                    summary.dominant_percentage = record.percentage;
                    summary.ties = vec![record.name.clone()];
                } else if record.percentage == summary.dominant_percentage {
                    summary.ties.push(record.name.clone());
                }
            }
            None => {
                let name = process
                    .and_then(|cfg| cfg.group_name(group_id))
                    .unwrap_or(group_id.as_str())
                    .to_string();
                groups.insert(
                    group_id.clone(),
                    GroupSummary {
                        group_id: group_id.clone(),
                        name,
                        response_count: group_counts.get(group_id).copied().unwrap_or(0),
                        max_weight: max_weights.get(group_id).copied().unwrap_or(0.0),
                        dominant: record.name.clone(),
                        dominant_percentage: record.percentage,
                        ties: vec![record.name.clone()],
                    },
                );
            }
        }
    }
    groups
}
