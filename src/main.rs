mod cli;

use assessment_engine::error::AssessError;
use assessment_engine::report::{self, OutputFormat};
use assessment_engine::types::config::ProcessConfig;
use assessment_engine::types::report::Decision;
use assessment_engine::{compute_assessment, config, rank_candidates, telemetry};
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_CUTOFF: i32 = 1;
    pub const INCONSISTENT_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: &cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn load_process(path: Option<&Path>) -> Result<Option<ProcessConfig>, AssessError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let cfg = config::load_config(path)?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn run(cli: cli::Cli) -> Result<i32, AssessError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let process = load_process(cmd.config.as_deref())?;
            let snapshot = config::load_snapshot(&cmd.snapshot)?;
            let result = compute_assessment(&snapshot, process.as_ref())?;

            let rendered = report::render(&result, output_format(&cmd.format))?;
            println!("{rendered}");

            let passing_score = process.as_ref().and_then(ProcessConfig::passing_score);
            match passing_score {
                Some(cutoff) if !result.meets(cutoff) => {
                    eprintln!(
                        "below cutoff: {} scored {:.1} (passing score {:.1})",
                        result.candidate_id, result.overall, cutoff
                    );
                    Ok(exit_code::BELOW_CUTOFF)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Rank(cmd) => {
            let process = load_process(cmd.config.as_deref())?;
            if let Some(cutoff) = cmd.cutoff {
                if !(0.0..=100.0).contains(&cutoff) {
                    return Err(AssessError::ConfigParse(
                        "--cutoff must be between 0.0 and 100.0".to_string(),
                    ));
                }
            }
            let passing_score = cmd
                .cutoff
                .or_else(|| process.as_ref().and_then(ProcessConfig::passing_score));

            let results = cmd
                .snapshots
                .iter()
                .map(|path| {
                    let snapshot = config::load_snapshot(path)?;
                    compute_assessment(&snapshot, process.as_ref())
                })
                .collect::<Result<Vec<_>, AssessError>>()?;

            let ranking = rank_candidates(&results, passing_score);
            let rendered = report::render_ranking(&ranking, output_format(&cmd.format))?;
            println!("{rendered}");
            tracing::info!(
                candidates = ranking.len(),
                passed = ranking
                    .iter()
                    .filter(|entry| entry.decision == Decision::Pass)
                    .count(),
                "ranking complete"
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let process = config::load_config(&cmd.config)?;
            process.validate()?;
            let (objective, opinion) = process.combiner_weights();
            println!(
                "config ok: {} trait group(s), weights {:.2}/{:.2}",
                process.trait_groups.len(),
                objective,
                opinion
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    if let Err(e) = telemetry::init(cli.verbose, cli.quiet) {
        eprintln!("warning: {}", e);
    }

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_inconsistent_input() {
                exit_code::INCONSISTENT_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
