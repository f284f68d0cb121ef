use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assess",
    version,
    about = "Candidate assessment scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one candidate snapshot
    Score(ScoreCommand),
    /// Score several snapshots and rank the candidates
    Rank(RankCommand),
    /// Load and validate a process configuration
    Validate(ValidateCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub snapshot: PathBuf,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct RankCommand {
    #[arg(required = true)]
    pub snapshots: Vec<PathBuf>,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Passing score; overrides scoring.passing_score from the config
    #[arg(long)]
    pub cutoff: Option<f64>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub config: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
