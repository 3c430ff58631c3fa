use anyhow::Context;
use clap::{Parser, Subcommand};
use faf_core::{resolve_type, TYPE_DEFINITIONS};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod config;
mod load;
mod render;

use config::{CliConfig, OutputFormat};

/// FAF - Type-aware completeness scoring for project context files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a .faf document
    Score {
        /// Document to score (default: project.faf)
        file: Option<PathBuf>,

        /// Output as JSON for integrations
        #[arg(long)]
        json: bool,

        /// Exit non-zero when the score is below this
        #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
        min_score: Option<u8>,
    },

    /// List every project type with its tiers and slot count
    Types,

    /// Show which canonical type a spelling resolves to
    Resolve {
        /// Raw project type, e.g. "k8s"
        raw: String,
    },
}

/// Exit status when a `--min-score` gate fails
const GATE_FAILED: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::new(),
    };

    match cli.command {
        Commands::Score {
            file,
            json,
            min_score,
        } => {
            let mut config = config;
            if json {
                config = config.with_format(OutputFormat::Json);
            }
            if let Some(min) = min_score {
                config = config.with_min_score(min);
            }
            let path = file.unwrap_or_else(|| config.default_file.clone());
            return score(&path, &config);
        }
        Commands::Types => {
            for line in type_lines() {
                println!("{}", line);
            }
        }
        Commands::Resolve { raw } => {
            println!("{}", resolve_type(Some(raw.as_str())));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn score(path: &Path, config: &CliConfig) -> anyhow::Result<ExitCode> {
    let document = load::load_document(path)?;
    let result = faf_core::compile(&document)
        .with_context(|| format!("Cannot score {}", path.display()))?;

    tracing::info!(
        "Scored {} as {}: {}%",
        path.display(),
        result.canonical_type,
        result.score
    );

    match config.format {
        OutputFormat::Json => println!("{}", render::render_json(&result)?),
        OutputFormat::Text => print!("{}", render::render_text(&result, config.show_missing)),
    }

    let status = gate_status(result.score, config.min_score);
    if status == GATE_FAILED {
        eprintln!(
            "Score {}% is below the required {}%",
            result.score,
            config.min_score.unwrap_or_default()
        );
    }

    Ok(ExitCode::from(status))
}

/// Exit status for a score checked against an optional minimum
fn gate_status(score: u8, min_score: Option<u8>) -> u8 {
    match min_score {
        Some(min) if score < min => GATE_FAILED,
        _ => 0,
    }
}

/// One line per registry entry: id, slot count, tiers
fn type_lines() -> Vec<String> {
    TYPE_DEFINITIONS
        .iter()
        .map(|def| {
            let tiers: Vec<String> = def.tiers.iter().map(ToString::to_string).collect();
            format!("{:<18} {:>2} slots  {}", def.id, def.slot_count(), tiers.join(", "))
        })
        .collect()
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_below_minimum_fails() {
        assert_eq!(gate_status(84, Some(85)), GATE_FAILED);
        assert_eq!(gate_status(0, Some(1)), 2);
    }

    #[test]
    fn test_gate_at_minimum_passes() {
        assert_eq!(gate_status(85, Some(85)), 0);
        assert_eq!(gate_status(100, Some(100)), 0);
    }

    #[test]
    fn test_gate_without_minimum_passes() {
        assert_eq!(gate_status(0, None), 0);
    }

    #[test]
    fn test_min_score_flag_is_capped() {
        let cli = Cli::try_parse_from(["faf", "score", "--min-score", "101"]);
        assert!(cli.is_err());
        let cli = Cli::try_parse_from(["faf", "score", "x.faf", "--min-score", "85"]).unwrap();
        assert!(matches!(cli.command, Commands::Score { min_score: Some(85), .. }));
    }

    #[test]
    fn test_resolve_output() {
        let cli = Cli::try_parse_from(["faf", "resolve", "k8s"]).unwrap();
        match cli.command {
            Commands::Resolve { raw } => assert_eq!(resolve_type(Some(raw.as_str())), "kubernetes"),
            _ => panic!("expected resolve subcommand"),
        }
    }

    #[test]
    fn test_type_lines() {
        let lines = type_lines();
        assert_eq!(lines.len(), TYPE_DEFINITIONS.len());
        assert!(lines[0].starts_with("cli "));
        assert!(lines[0].contains(" 9 slots  PROJECT, HUMAN"));
        let generic = lines.last().unwrap();
        assert!(generic.contains("12 slots  PROJECT, UNIVERSAL, HUMAN"));
    }
}
