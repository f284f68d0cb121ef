//! Input records handed to the engine by the persistence layer.
//!
//! A snapshot is one candidate's responses together with every question,
//! option and stage those responses reference, fetched within one logical
//! read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    pub candidate_id: String,
    #[serde(default)]
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub responses: Vec<Response>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub order: u32,
}

/// Question type tag. Tags outside the known set land in `Unrecognized`
/// so classification still matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionKind {
    #[serde(alias = "MULTIPLE_CHOICE", alias = "multiple_choice", alias = "objective")]
    Objective,
    #[serde(alias = "OPINION", alias = "opinion", alias = "preference")]
    Preference,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub stage_id: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub is_correct: Option<bool>,
    #[serde(rename = "trait")]
    pub trait_name: Option<String>,
    pub weight: Option<f64>,
    pub group_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub candidate_id: String,
    pub question_id: String,
    pub option_id: Option<String>,
    pub time_spent_secs: Option<f64>,
    pub is_correct: Option<bool>,
    pub answered_at: Option<DateTime<Utc>>,
}
