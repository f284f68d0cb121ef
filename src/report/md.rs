use crate::types::report::RankedCandidate;
use crate::types::scoring::ScoreResult;

pub fn to_markdown(result: &ScoreResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Assessment Report: {}\n\n", result.candidate_id));
    output.push_str(&format!("Overall score: {:.1}\n\n", result.overall));
    output.push_str(&format!(
        "Weights: objective {:.2} / opinion {:.2}{}\n\n",
        result.weights.objective,
        result.weights.opinion,
        if result.weights.fallback_applied {
            " (default split)"
        } else {
            ""
        }
    ));

    let objective = &result.objective;
    output.push_str("## Objective\n\n");
    output.push_str(&format!(
        "- total: {}\n- correct: {}\n- incorrect: {}\n- accuracy: {:.1}\n\n",
        objective.total, objective.correct, objective.incorrect, objective.accuracy
    ));
    if !objective.stages.is_empty() {
        output.push_str("| stage | total | correct | accuracy |\n");
        output.push_str("|---|---|---|---|\n");
        for stage in &objective.stages {
            output.push_str(&format!(
                "| {} | {} | {} | {:.1} |\n",
                stage.stage_name, stage.total, stage.correct, stage.accuracy
            ));
        }
        output.push('\n');
    }

    let traits = &result.traits;
    output.push_str("## Traits\n\n");
    output.push_str(&format!("Opinion score: {:.1}\n\n", traits.opinion_score));
    if traits.records.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str(&format!("Dominant: {}\n\n", traits.dominant.join(", ")));
        for group in traits.groups.values() {
            output.push_str(&format!(
                "- {}: {} ({:.1}%)",
                group.name, group.dominant, group.dominant_percentage
            ));
            if group.ties.len() > 1 {
                output.push_str(&format!(", tied with {}", group.ties[1..].join(", ")));
            }
            output.push('\n');
        }
        if !traits.groups.is_empty() {
            output.push('\n');
        }

        output.push_str("| trait | group | count | percentage | weighted |\n");
        output.push_str("|---|---|---|---|---|\n");
        for record in &traits.records {
            output.push_str(&format!(
                "| {} | {} | {} | {:.1} | {:.1} |\n",
                record.name,
                record.group_id.as_deref().unwrap_or("-"),
                record.count,
                record.percentage,
                record.weighted_score
            ));
        }
        output.push('\n');
    }

    let timing = &result.timing;
    output.push_str("## Timing\n\n");
    output.push_str(&format!(
        "- total: {:.1}s\n- average per question: {:.1}s\n",
        timing.total_time_secs, timing.avg_time_per_question
    ));
    if let Some(span) = timing.span_secs {
        output.push_str(&format!("- answering window: {span}s\n"));
    }
    output.push('\n');

    let diagnostics = &result.diagnostics;
    output.push_str("## Diagnostics\n\n");
    let mut notes = Vec::new();
    if diagnostics.unrecognized_question_types > 0 {
        notes.push(format!(
            "{} response(s) to questions with an unrecognized type",
            diagnostics.unrecognized_question_types
        ));
    }
    if diagnostics.unresolved_traits > 0 {
        notes.push(format!(
            "{} preference response(s) skipped due to unresolved trait",
            diagnostics.unresolved_traits
        ));
    }
    if diagnostics.derived_trait_labels > 0 {
        notes.push(format!(
            "{} trait label(s) derived from option text",
            diagnostics.derived_trait_labels
        ));
    }
    if diagnostics.conflicting_trait_weights > 0 {
        notes.push(format!(
            "{} selection(s) carried a trait weight different from the one in use",
            diagnostics.conflicting_trait_weights
        ));
    }
    if diagnostics.defaulted_time_values > 0 {
        notes.push(format!(
            "{} missing or negative time value(s) counted as zero",
            diagnostics.defaulted_time_values
        ));
    }
    if diagnostics.weight_fallback {
        notes.push("configured weights summed to zero; default split used".to_string());
    }
    if notes.is_empty() {
        output.push_str("- none\n");
    } else {
        for note in notes {
            output.push_str(&format!("- {note}\n"));
        }
    }

    output
}

pub fn ranking_to_markdown(ranking: &[RankedCandidate]) -> String {
    let mut output = String::new();
    output.push_str("# Candidate Ranking\n\n");
    if ranking.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    output.push_str("| # | candidate | overall | accuracy | opinion | decision |\n");
    output.push_str("|---|---|---|---|---|---|\n");
    for entry in ranking {
        output.push_str(&format!(
            "| {} | {} | {:.1} | {:.1} | {:.1} | {} |\n",
            entry.position,
            entry.candidate_id,
            entry.overall,
            entry.accuracy,
            entry.opinion_score,
            entry.decision
        ));
    }
    output
}
