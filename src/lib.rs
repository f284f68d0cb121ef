//! Deterministic scoring for candidate assessments.
//!
//! [`compute_assessment`] turns one candidate's recorded responses into an
//! objective accuracy score, a trait profile and a blended overall score.
//! Everything under [`engine`] is pure; loading snapshots and process
//! configuration from disk lives in [`config`].

pub mod config;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod report;
pub mod telemetry;
pub mod types;

pub use engine::compute_assessment;
pub use error::{AssessError, Result};
pub use ranking::rank_candidates;
pub use types::config::ProcessConfig;
pub use types::scoring::ScoreResult;
pub use types::snapshot::AssessmentSnapshot;
