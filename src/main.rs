//! # taskdeck - terminal task management UI
//!
//! A three-panel terminal UI for working through a day's tasks: a sidebar
//! for navigation, a task list with expandable subtasks, and a detail panel
//! for the selected task.
//!
//! ## Key features
//!
//! - **Single state owner**: one in-memory store holds the task collection,
//!   the selection and the active navigation id; panels render from it and
//!   dispatch intents back into it
//! - **Expandable subtasks**: per-task checklists with independent toggles
//!   and a done/total counter; expansion is view state, not domain state
//! - **Detail panel**: date, time, priority and a local notes editor for the
//!   selected task
//! - **Seedable**: tasks come from a built-in fixture or a JSON seed file
//!
//! ## Quick start
//!
//! ```bash
//! # Launch with the built-in fixture
//! taskdeck
//!
//! # Launch with your own tasks
//! taskdeck --seed my-tasks.json
//!
//! # Debug logging (the terminal owns stdout, so logs go to a file)
//! RUST_LOG=debug taskdeck --log-file /tmp/taskdeck.log
//! ```
//!
//! ## Keys
//!
//! - `Tab` switch focus between sidebar and list
//! - `↑`/`↓` (or `j`/`k`) move, `Enter` select / choose
//! - `Space` toggle completion, `→`/`←` expand/collapse subtasks
//! - `n` edit notes for the selected task, `Esc` close / back, `q` quit
//!
//! Nothing is persisted: state lives in memory for the session.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod fields;
pub mod seed;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod detail;
    pub mod enums;
    pub mod input;
    pub mod sidebar;
    pub mod task_list;
}

use cli::Cli;
use seed::{load_seed, seed_tasks};
use store::TaskStore;
use tui::app::App;

fn main() {
    if let Err(e) = run() {
        eprintln!("taskdeck: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    // A malformed seed is fatal before the terminal is touched; we never
    // render partial state.
    let tasks = match cli.seed.as_deref() {
        Some(path) => load_seed(path)?,
        None => seed_tasks(),
    };
    tracing::info!(count = tasks.len(), "seeded task collection");

    let store = TaskStore::new(tasks);
    let mut app = App::new(store);

    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("UI error")
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}
