//! CLI argument definitions for the `rulechat` binary.

use std::path::PathBuf;

use clap::Parser;

/// Chat with your condominium rules documents.
#[derive(Parser)]
#[command(name = "rulechat", version, about, long_about = None)]
pub struct Cli {
    /// Rules documents (PDF or plain text) to load at startup.
    #[arg(long, value_name = "FILE", num_args = 1..)]
    pub docs: Vec<PathBuf>,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}
