//! Shared entry point so the binary and integration tests dispatch
//! identically.

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::Path;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::config;

/// Parses `args` and runs the selected command, writing report output to
/// `writer`. Returns the process exit code.
///
/// # Errors
///
/// Returns an error on fatal conditions (unreadable or malformed mapping
/// document); recoverable conditions are reflected in the report and exit
/// code instead.
pub fn run_with_args<I, T, W>(args: I, writer: &mut W) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    W: Write,
{
    let cli = Cli::parse_from(args);
    let config = config::load_from_path(Path::new("."));

    match cli.command {
        Commands::Scan {
            corpus,
            top,
            verbose,
        } => commands::run_scan(&corpus, top, verbose, &config, writer),
        Commands::Gaps {
            corpus,
            fail_threshold,
        } => commands::run_gaps(&corpus, fail_threshold, &config, writer),
        Commands::Patterns { mapping, json } => {
            commands::run_patterns(mapping.as_deref(), json, &config, writer)
        }
    }
}
