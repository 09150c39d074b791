//! Scorekeeper CLI - score bowling games from stored frame rows.

mod config;
mod output;
mod telemetry;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use scorekeeper::domain::{check_frame, Frame};
use scorekeeper::protocol::{FrameRecord, PlayerFramesRecord};
use scorekeeper::services::{build_scoreboard, roll_options};
use scorekeeper::AppError;
use tracing::{debug, error};

use crate::config::{CliConfig, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "scorekeeper")]
#[command(about = "Score ten-pin bowling games", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format (overrides SCOREKEEPER_LOG_FORMAT)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a game from a JSON array of player frame records
    Score {
        /// Path to the JSON file
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Show the legal roll options for a frame
    Options {
        /// Frame number (1-10)
        #[arg(long)]
        frame_number: u8,

        /// First ball symbol
        #[arg(long)]
        first: Option<String>,

        /// Second ball symbol
        #[arg(long)]
        second: Option<String>,

        /// Bonus ball symbol (frame 10 only)
        #[arg(long)]
        bonus: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match CliConfig::from_env(args.verbose, args.log_format) {
        Ok(c) => c,
        Err(e) => {
            report(&e);
            return ExitCode::from(2);
        }
    };
    telemetry::init_tracing(&config);
    debug!(?config, "configuration loaded");

    match run(args.command) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = %e.code(), detail = e.detail(), "command failed");
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &AppError) {
    match serde_json::to_string_pretty(&err.problem()) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{err}"),
    }
}

fn run(command: Command) -> Result<String, AppError> {
    match command {
        Command::Score { path, format } => score(&path, format),
        Command::Options {
            frame_number,
            first,
            second,
            bonus,
        } => options(FrameRecord {
            frame_number,
            first_roll: first,
            second_roll: second,
            bonus_roll: bonus,
        }),
    }
}

fn score(path: &Path, format: OutputFormat) -> Result<String, AppError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::bad_request(
            scorekeeper::ErrorCode::InvalidInput,
            format!("cannot read {}: {e}", path.display()),
        )
    })?;
    let records: Vec<PlayerFramesRecord> = serde_json::from_str(&raw)?;
    debug!(players = records.len(), path = %path.display(), "scoring file");

    let board = build_scoreboard(&records)?;
    match format {
        OutputFormat::Table => Ok(output::render_table(&board).trim_end().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&board)?),
    }
}

fn options(record: FrameRecord) -> Result<String, AppError> {
    let frame = Frame::try_from(&record)?;
    check_frame(&frame)?;
    Ok(serde_json::to_string_pretty(&roll_options(&frame))?)
}
