//! Command line argument parsing for the Neurospell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Default dictionary file, looked up in the working directory.
pub const DEFAULT_DICTIONARY: &str = "knownWords.txt";

/// Neurospell - a pair-index spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "neurospell")]
#[command(about = "Spelling correction through an associative character-pair index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NeurospellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NeurospellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for words
    Correct(CorrectArgs),

    /// List the words containing a character pair
    Pair(PairArgs),

    /// Show dictionary and pair index statistics
    Stats(StatsArgs),
}

/// Dictionary source shared by every command
#[derive(Parser, Debug, Clone)]
pub struct DictionaryArgs {
    /// Word list with one word per line
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "NEUROSPELL_DICTIONARY",
        default_value = DEFAULT_DICTIONARY
    )]
    pub dictionary: PathBuf,
}

/// Arguments for correcting words
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Words to correct (read from stdin, one per line, when omitted)
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Only suggest words of exactly the same length
    #[arg(short, long)]
    pub strict_length: bool,

    /// Maximum number of suggestions per word
    #[arg(short = 'n', long, value_name = "N")]
    pub max_results: Option<usize>,

    /// Tolerance when selecting words tied with the best score
    #[arg(long, value_name = "EPSILON")]
    pub tie_epsilon: Option<f64>,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the pair lookup
#[derive(Parser, Debug, Clone)]
pub struct PairArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Two characters, e.g. "th"
    #[arg(value_name = "PAIR")]
    pub pair: String,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// List the size of every non-empty pair cell
    #[arg(long)]
    pub detailed: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
