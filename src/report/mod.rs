pub mod json;
pub mod md;

use crate::error::AssessError;
use crate::types::report::RankedCandidate;
use crate::types::scoring::ScoreResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(result: &ScoreResult, format: OutputFormat) -> Result<String, AssessError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(AssessError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}

pub fn render_ranking(
    ranking: &[RankedCandidate],
    format: OutputFormat,
) -> Result<String, AssessError> {
    match format {
        OutputFormat::Json => json::ranking_to_json(ranking).map_err(AssessError::Json),
        OutputFormat::Md => Ok(md::ranking_to_markdown(ranking)),
    }
}
