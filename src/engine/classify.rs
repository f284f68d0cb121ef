use crate::error::{AssessError, Result};
use crate::types::snapshot::{AssessmentSnapshot, Question, QuestionKind, Response};
use std::collections::{HashMap, HashSet};

/// A response joined with the question it answers.
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub response: &'a Response,
    pub question: &'a Question,
}

#[derive(Debug, Default)]
pub struct Classified<'a> {
    /// Every resolved response in input order, whatever its type.
    pub all: Vec<Scored<'a>>,
    pub objective: Vec<Scored<'a>>,
    pub preference: Vec<Scored<'a>>,
    pub unrecognized: usize,
}

pub fn classify(snapshot: &AssessmentSnapshot) -> Result<Classified<'_>> {
    let questions: HashMap<&str, &Question> = snapshot
        .questions
        .iter()
        .map(|question| (question.id.as_str(), question))
        .collect();

    let mut answered = HashSet::<&str>::new();
    let mut classified = Classified::default();
    for response in &snapshot.responses {
        if response.candidate_id != snapshot.candidate_id {
            return Err(AssessError::InconsistentInput(format!(
                "response to question '{}' belongs to candidate '{}', expected '{}'",
                response.question_id, response.candidate_id, snapshot.candidate_id
            )));
        }
        let question = questions
            .get(response.question_id.as_str())
            .copied()
            .ok_or_else(|| {
                AssessError::InconsistentInput(format!(
                    "response references question '{}' which is not in the snapshot",
                    response.question_id
                ))
            })?;
        if !answered.insert(question.id.as_str()) {
            return Err(AssessError::InconsistentInput(format!(
                "candidate '{}' has more than one response for question '{}'",
                snapshot.candidate_id, question.id
            )));
        }

        let scored = Scored { response, question };
        classified.all.push(scored);
        match question.kind {
            QuestionKind::Objective => classified.objective.push(scored),
            QuestionKind::Preference => classified.preference.push(scored),
            QuestionKind::Unrecognized => {
                tracing::warn!(
                    question = %question.id,
                    "skipping response to question with unrecognized type"
                );
                classified.unrecognized += 1;
            }
        }
    }
    Ok(classified)
}
