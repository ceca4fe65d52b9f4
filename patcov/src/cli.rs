//! Command line interface definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.patcov.toml):
  Create this file in your project root to set defaults.

  [patcov]
  mapping = \"data/secret-mapping.json\"  # Mapping document path
  top = 20                              # Rules shown per scan summary
  fail_threshold = 0                    # Exit 1 if gap count exceeds this
  exclude_folders = [\"fixtures-wip\"]    # Extra folders to skip
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "patcov - Coverage analysis for secret value-pattern rules against credential corpora",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every corpus-consuming subcommand.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Corpus roots to scan (directories).
    #[arg(required = true)]
    pub roots: Vec<PathBuf>,

    /// Path to the mapping document (overrides the config file).
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// Folders to exclude from the walk, in addition to the defaults.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Output raw JSON.
    #[arg(long)]
    pub json: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan corpora and report per-rule coverage
    Scan {
        /// Corpus and mapping options.
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Number of top rules to show (overrides the config file).
        #[arg(long)]
        top: Option<usize>,

        /// Show sample match excerpts per rule.
        #[arg(short, long)]
        verbose: bool,
    },
    /// List rules with zero matches across all corpora
    Gaps {
        /// Corpus and mapping options.
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Exit with code 1 if the gap count exceeds this threshold.
        #[arg(long)]
        fail_threshold: Option<usize>,
    },
    /// List loaded rules and their compile status
    Patterns {
        /// Path to the mapping document (overrides the config file).
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// Output raw JSON.
        #[arg(long)]
        json: bool,
    },
}
