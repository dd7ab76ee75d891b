//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Terminal task-management UI. State lives in memory for the session;
/// tasks come from the built-in fixture or a JSON seed file.
#[derive(Parser)]
#[command(name = "taskdeck", version, about = "Terminal task-management UI")]
pub struct Cli {
    /// Path to a JSON seed file (an array of task records).
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Write tracing output to this file. Without it nothing is logged,
    /// since the terminal itself owns stdout.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
