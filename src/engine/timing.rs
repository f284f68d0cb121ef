use super::classify::Scored;
use super::stage_sequence;
use crate::types::scoring::{StageTiming, TimingSummary};
use crate::types::snapshot::{Response, Stage};
use std::collections::HashMap;

/// Missing, negative or non-finite durations count as zero.
fn time_spent(response: &Response) -> (f64, bool) {
    match response.time_spent_secs {
        Some(secs) if secs.is_finite() && secs >= 0.0 => (secs, false),
        _ => (0.0, true),
    }
}

pub fn aggregate_timing(responses: &[Scored<'_>], stages: &[Stage]) -> TimingSummary {
    let durations = responses
        .iter()
        .map(|scored| time_spent(scored.response))
        .collect::<Vec<_>>();
    let total_time_secs: f64 = durations.iter().map(|(secs, _)| secs).sum();
    let defaulted_values = durations.iter().filter(|(_, defaulted)| *defaulted).count();
    let avg_time_per_question = if responses.is_empty() {
        0.0
    } else {
        total_time_secs / responses.len() as f64
    };

    let per_stage = responses.iter().zip(&durations).fold(
        HashMap::<&str, (f64, usize)>::new(),
        |mut acc, (scored, (secs, _))| {
            let entry = acc.entry(scored.question.stage_id.as_str()).or_default();
            entry.0 += secs;
            entry.1 += 1;
            acc
        },
    );
    let stage_timings = stage_sequence(
        stages,
        responses
            .iter()
            .map(|scored| scored.question.stage_id.as_str()),
    )
    .into_iter()
    .filter_map(|(stage_id, _)| {
        per_stage.get(stage_id).map(|(secs, count)| StageTiming {
            stage_id: stage_id.to_string(),
            total_time_secs: *secs,
            responses: *count,
        })
    })
    .collect();

    let first_answered_at = responses
        .iter()
        .filter_map(|scored| scored.response.answered_at)
        .min();
    let last_answered_at = responses
        .iter()
        .filter_map(|scored| scored.response.answered_at)
        .max();
    let span_secs = first_answered_at
        .zip(last_answered_at)
        .map(|(first, last)| last.signed_duration_since(first).num_seconds());

    TimingSummary {
        total_time_secs,
        avg_time_per_question,
        responses: responses.len(),
        defaulted_values,
        stages: stage_timings,
        first_answered_at,
        last_answered_at,
        span_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::classify::classify;
    use crate::engine::test_support::{objective_question, response, stage};
    use crate::types::snapshot::AssessmentSnapshot;
    use chrono::{TimeZone, Utc};

    fn timed(question_id: &str, secs: Option<f64>) -> Response {
        let mut timed = response(question_id, Some("right"));
        timed.time_spent_secs = secs;
        timed
    }

    #[test]
    fn empty_input_yields_zero() {
        let summary = aggregate_timing(&[], &[]);
        assert_eq!(summary.total_time_secs, 0.0);
        assert_eq!(summary.avg_time_per_question, 0.0);
        assert!(summary.first_answered_at.is_none());
        assert!(summary.span_secs.is_none());
    }

    #[test]
    fn negative_and_missing_times_count_as_zero() {
        let snapshot = AssessmentSnapshot {
            candidate_id: "cand".to_string(),
            stages: vec![stage("b", "Second", 2), stage("a", "First", 1)],
            questions: vec![
                objective_question("q1", "b"),
                objective_question("q2", "a"),
                objective_question("q3", "a"),
                objective_question("q4", "a"),
            ],
            responses: vec![
                timed("q1", Some(30.0)),
                timed("q2", Some(-12.0)),
                timed("q3", None),
                timed("q4", Some(18.0)),
            ],
        };
        let classified = classify(&snapshot).expect("classify");
        let summary = aggregate_timing(&classified.all, &snapshot.stages);

        assert_eq!(summary.total_time_secs, 48.0);
        assert_eq!(summary.avg_time_per_question, 12.0);
        assert_eq!(summary.responses, 4);
        assert_eq!(summary.defaulted_values, 2);
        assert_eq!(
            summary.stages,
            vec![
                StageTiming {
                    stage_id: "a".to_string(),
                    total_time_secs: 18.0,
                    responses: 3,
                },
                StageTiming {
                    stage_id: "b".to_string(),
                    total_time_secs: 30.0,
                    responses: 1,
                },
            ]
        );
    }

    #[test]
    fn answering_window_spans_first_to_last_timestamp() {
        let mut early = timed("q1", Some(5.0));
        early.answered_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());
        let mut late = timed("q2", Some(5.0));
        late.answered_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 20, 30).unwrap());
        let snapshot = AssessmentSnapshot {
            candidate_id: "cand".to_string(),
            stages: Vec::new(),
            questions: vec![
                objective_question("q1", "s"),
                objective_question("q2", "s"),
                objective_question("q3", "s"),
            ],
            responses: vec![late, timed("q3", Some(1.0)), early],
        };
        let classified = classify(&snapshot).expect("classify");
        let summary = aggregate_timing(&classified.all, &[]);

        assert_eq!(
            summary.first_answered_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(summary.span_secs, Some(1230));
    }
}
