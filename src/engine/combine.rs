use super::round1;
use crate::error::{AssessError, Result};
use crate::types::config::{DEFAULT_MULTIPLE_CHOICE_WEIGHT, DEFAULT_OPINION_WEIGHT};
use crate::types::scoring::{CombinerWeights, Score};

/// Scales the configured pair so it sums to 1. A zero sum falls back to the
/// default split.
pub fn normalize_weights(objective: f64, opinion: f64) -> Result<CombinerWeights> {
    for (key, weight) in [("multiple_choice_weight", objective), ("opinion_weight", opinion)] {
        if !weight.is_finite() || weight < 0.0 {
            return Err(AssessError::InconsistentInput(format!(
                "{key} must be a non-negative number (found {weight})"
            )));
        }
    }

    let sum = objective + opinion;
    if sum <= 0.0 {
        tracing::warn!("combiner weights sum to zero; using the default split");
        return Ok(CombinerWeights {
            objective: DEFAULT_MULTIPLE_CHOICE_WEIGHT,
            opinion: DEFAULT_OPINION_WEIGHT,
            fallback_applied: true,
        });
    }

    Ok(CombinerWeights {
        objective: objective / sum,
        opinion: opinion / sum,
        fallback_applied: false,
    })
}

/// `None` marks a question type absent from the test, which then carries no
/// weight at all.
pub fn combine(
    accuracy: Option<Score>,
    opinion: Option<Score>,
    weights: &CombinerWeights,
) -> Score {
    let overall = match (accuracy, opinion) {
        (Some(accuracy), Some(opinion)) => accuracy * weights.objective + opinion * weights.opinion,
        (Some(accuracy), None) => accuracy,
        (None, Some(opinion)) => opinion,
        (None, None) => 0.0,
    };
    round1(overall).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_normalized() {
        let weights = normalize_weights(3.0, 1.0).expect("weights should normalize");
        assert_eq!(weights.objective, 0.75);
        assert_eq!(weights.opinion, 0.25);
        assert!(!weights.fallback_applied);
    }

    #[test]
    fn zero_sum_falls_back_to_default_split() {
        let weights = normalize_weights(0.0, 0.0).expect("zero weights fall back");
        assert_eq!(weights.objective, 0.5);
        assert_eq!(weights.opinion, 0.5);
        assert!(weights.fallback_applied);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = normalize_weights(-1.0, 2.0).expect_err("negative weight should fail");
        assert!(err.is_inconsistent_input());
    }

    #[test]
    fn blends_when_both_types_present() {
        let weights = normalize_weights(0.7, 0.3).expect("weights");
        assert_eq!(combine(Some(80.0), Some(50.0), &weights), 71.0);
    }

    #[test]
    fn single_type_passes_through_unweighted() {
        let weights = normalize_weights(0.9, 0.1).expect("weights");
        assert_eq!(combine(Some(70.0), None, &weights), 70.0);
        assert_eq!(combine(None, Some(42.5), &weights), 42.5);
        assert_eq!(combine(None, None, &weights), 0.0);
    }
}
