//! CLI entry point for the puzzle tile reassembler

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use primetile::io::cli::{Cli, PuzzleProcessor};
use primetile::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match PuzzleProcessor::new(cli).process() {
        Ok(summary) => {
            info!(
                "reassembled {} tiles into {} rows ({}x{})",
                summary.tiles, summary.rows, summary.width, summary.height
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
