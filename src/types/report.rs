use crate::types::scoring::Score;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Pass,
    Fail,
    /// No passing score configured.
    Unscreened,
}

impl Decision {
    /// Same label the JSON renderer emits.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Pass => "pass",
            Decision::Fail => "fail",
            Decision::Unscreened => "unscreened",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub position: usize,
    pub candidate_id: String,
    pub overall: Score,
    pub accuracy: Score,
    pub opinion_score: Score,
    pub dominant_traits: Vec<String>,
    pub decision: Decision,
}
