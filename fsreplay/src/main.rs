//! Replays a `cd`/`ls` terminal transcript into a directory tree.
//!
//! Prints aggregate-size answers, the rendered tree, or a structural check.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use fsreplay::check::{CheckOutcome, check_tree};
use fsreplay::core::render::render_tree;
use fsreplay::exit_codes;
use fsreplay::io::config::{
    DEFAULT_CONFIG_FILE, QueryConfig, QueryOverrides, load_config, write_config,
};
use fsreplay::io::transcript::TranscriptSource;
use fsreplay::replay::replay_source;
use fsreplay::report::{build_report, render_report};

#[derive(Parser)]
#[command(
    name = "fsreplay",
    version,
    about = "Rebuild a directory tree from a cd/ls transcript and query its sizes"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the bounded-sum total and the smallest directory to delete.
    Report {
        /// Transcript file; stdin when omitted or `-`.
        transcript: Option<PathBuf>,
        /// Config file with query thresholds.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Directories at most this large count toward the sum.
        #[arg(long)]
        limit: Option<u64>,
        /// Total disk capacity in bytes.
        #[arg(long)]
        capacity: Option<u64>,
        /// Free space required in bytes.
        #[arg(long)]
        required: Option<u64>,
        /// Emit JSON instead of `report:` lines.
        #[arg(long)]
        json: bool,
    },
    /// Print the rebuilt tree with recursive sizes.
    Tree {
        /// Transcript file; stdin when omitted or `-`.
        transcript: Option<PathBuf>,
    },
    /// Replay the transcript and validate tree invariants.
    Check {
        /// Transcript file; stdin when omitted or `-`.
        transcript: Option<PathBuf>,
    },
    /// Write the default config file if missing.
    Init {
        /// Config file to create.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    fsreplay::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::for_error(&err));
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Report {
            transcript,
            config,
            limit,
            capacity,
            required,
            json,
        } => {
            let overrides = QueryOverrides {
                limit,
                capacity,
                required,
            };
            cmd_report(transcript.as_deref(), &config, &overrides, json)
        }
        Command::Tree { transcript } => cmd_tree(transcript.as_deref()),
        Command::Check { transcript } => cmd_check(transcript.as_deref()),
        Command::Init { config, force } => cmd_init(&config, force),
    }
}

fn cmd_report(
    transcript: Option<&Path>,
    config: &Path,
    overrides: &QueryOverrides,
    json: bool,
) -> Result<i32> {
    let cfg = load_config(config)?.with_overrides(overrides)?;
    let tree = replay_source(TranscriptSource::from_arg(transcript))?;
    let report = build_report(&tree, &cfg)?;
    info!(
        sum_at_most_limit = report.sum_at_most_limit,
        smallest = report.smallest.size,
        "report computed"
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(exit_codes::OK)
}

fn cmd_tree(transcript: Option<&Path>) -> Result<i32> {
    let tree = replay_source(TranscriptSource::from_arg(transcript))?;
    print!("{}", render_tree(&tree)?);
    Ok(exit_codes::OK)
}

fn cmd_check(transcript: Option<&Path>) -> Result<i32> {
    let tree = replay_source(TranscriptSource::from_arg(transcript))?;
    match check_tree(&tree)? {
        CheckOutcome::Sound(summary) => {
            println!(
                "check: ok directories={} files={} total_size={}",
                summary.directories, summary.files, summary.total_size
            );
            Ok(exit_codes::OK)
        }
        CheckOutcome::Violations(errors) => {
            eprintln!("check: invariant violations:\n- {}", errors.join("\n- "));
            Ok(exit_codes::UNSATISFIED)
        }
    }
}

fn cmd_init(config: &Path, force: bool) -> Result<i32> {
    if config.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config.display()
        );
    }
    write_config(config, &QueryConfig::default())?;
    println!("init: wrote {}", config.display());
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_report_defaults() {
        let cli = Cli::parse_from(["fsreplay", "report"]);
        match cli.command {
            Command::Report {
                transcript,
                config,
                limit,
                json,
                ..
            } => {
                assert_eq!(transcript, None);
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_FILE));
                assert_eq!(limit, None);
                assert!(!json);
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn parse_report_overrides() {
        let cli = Cli::parse_from([
            "fsreplay",
            "report",
            "t.txt",
            "--limit",
            "10",
            "--capacity",
            "100",
            "--required",
            "50",
            "--json",
        ]);
        assert!(matches!(
            cli.command,
            Command::Report {
                limit: Some(10),
                capacity: Some(100),
                required: Some(50),
                json: true,
                ..
            }
        ));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["fsreplay", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }
}
