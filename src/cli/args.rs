//! Command line argument parsing for the lexreply CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// lexreply - answer customer-support questions by intent matching
#[derive(Parser, Debug, Clone)]
#[command(name = "lexreply")]
#[command(about = "Match customer questions to canned responses with TF-IDF")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexreplyArgs {
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

    /// Intent corpus file (JSON array, or JSON Lines with a .jsonl extension)
    #[arg(long, value_name = "FILE", env = "LEXREPLY_CORPUS", global = true)]
    pub corpus: Option<PathBuf>,

    /// Responder configuration file (JSON)
    #[arg(long, value_name = "FILE", env = "LEXREPLY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexreplyArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Answer a single question
    Ask(AskArgs),

    /// Show how a question is matched
    Explain(ExplainArgs),

    /// List the loaded intents
    Intents,

    /// Start an interactive chat session on stdin
    Chat,
}

/// Arguments for answering a question
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The customer question
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for explaining a match
#[derive(Parser, Debug, Clone)]
pub struct ExplainArgs {
    /// The customer question
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Number of top-scoring intents to show in human output
    #[arg(short, long, default_value = "3")]
    pub top: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
