//! Pathfinder - directed weighted graph store CLI
//!
//! Create and delete nodes and edges, then query the graph with
//! breadth-first traversal and Dijkstra shortest paths.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use pathfinder_core::error::{ExitCode as PathfinderExitCode, PathfinderError};
use pathfinder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(PathfinderExitCode::Success),
        Err(e) => {
            report_error(&cli, &e);
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: PathfinderExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Print a command failure in the requested format
fn report_error(cli: &Cli, error: &PathfinderError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
}

/// Handle a clap failure. Help and version always go through clap; other
/// failures become a JSON envelope when argv asked for JSON, since `Cli`
/// never got built.
fn parse_failure(err: clap::Error) -> ExitCode {
    if matches!(
        err.kind(),
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
    ) || !argv_requests_json(env::args().skip(1))
    {
        err.exit();
    }

    let error = usage_error_from(&err);
    eprintln!("{}", error.to_json());
    exit_with(error.exit_code())
}

fn usage_error_from(err: &clap::Error) -> PathfinderError {
    match err.kind() {
        // A repeated `--format` is reported as a conflict
        ClapErrorKind::ArgumentConflict => PathfinderError::DuplicateFormat,
        ClapErrorKind::ValueValidation
        | ClapErrorKind::InvalidValue
        | ClapErrorKind::InvalidSubcommand
        | ClapErrorKind::UnknownArgument
        | ClapErrorKind::MissingRequiredArgument
        | ClapErrorKind::MissingSubcommand => PathfinderError::UsageError(err.to_string()),
        _ => PathfinderError::Other(err.to_string()),
    }
}

/// Whether the raw arguments select `--format json`
fn argv_requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let args: Vec<String> = args.into_iter().collect();
    args.iter().any(|a| a == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
