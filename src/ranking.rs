use crate::types::report::{Decision, RankedCandidate};
use crate::types::scoring::ScoreResult;

pub fn decide(result: &ScoreResult, passing_score: Option<f64>) -> Decision {
    match passing_score {
        Some(cutoff) if result.meets(cutoff) => Decision::Pass,
        Some(_) => Decision::Fail,
        None => Decision::Unscreened,
    }
}

/// Orders candidates by overall score, highest first. Equal scores share a
/// position (competition ranking) and are listed by candidate id.
pub fn rank_candidates(
    results: &[ScoreResult],
    passing_score: Option<f64>,
) -> Vec<RankedCandidate> {
    let mut ordered = results.iter().collect::<Vec<_>>();
    ordered.sort_by(|a, b| {
        b.overall
            .total_cmp(&a.overall)
            .then_with(|| a.candidate_id.cmp(&b.candidate_id))
    });

    let mut ranked: Vec<RankedCandidate> = Vec::with_capacity(ordered.len());
    for (index, result) in ordered.into_iter().enumerate() {
        let position = match ranked.last() {
            Some(previous) if previous.overall == result.overall => previous.position,
            _ => index + 1,
        };
        ranked.push(RankedCandidate {
            position,
            candidate_id: result.candidate_id.clone(),
            overall: result.overall,
            accuracy: result.objective.accuracy,
            opinion_score: result.traits.opinion_score,
            dominant_traits: result.traits.dominant.clone(),
            decision: decide(result, passing_score),
        });
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::{
        CombinerWeights, Diagnostics, ObjectiveSummary, TimingSummary, TraitSummary,
    };

    fn result(candidate_id: &str, overall: f64) -> ScoreResult {
        ScoreResult {
            candidate_id: candidate_id.to_string(),
            objective: ObjectiveSummary::default(),
            traits: TraitSummary::default(),
            overall,
            weights: CombinerWeights {
                objective: 0.5,
                opinion: 0.5,
                fallback_applied: false,
            },
            timing: TimingSummary::default(),
            diagnostics: Diagnostics::default(),
        }
    }

    #[test]
    fn ranks_by_overall_with_shared_positions() {
        let results = vec![
            result("carol", 55.0),
            result("bob", 80.0),
            result("alice", 80.0),
            result("dave", 40.0),
        ];
        let ranked = rank_candidates(&results, Some(50.0));

        let order = ranked
            .iter()
            .map(|entry| (entry.position, entry.candidate_id.as_str(), entry.decision))
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                (1, "alice", Decision::Pass),
                (1, "bob", Decision::Pass),
                (3, "carol", Decision::Pass),
                (4, "dave", Decision::Fail),
            ]
        );
    }

    #[test]
    fn cutoff_is_inclusive() {
        assert_eq!(decide(&result("a", 60.0), Some(60.0)), Decision::Pass);
        assert_eq!(decide(&result("a", 59.9), Some(60.0)), Decision::Fail);
        assert_eq!(decide(&result("a", 10.0), None), Decision::Unscreened);
    }
}
