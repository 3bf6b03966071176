//! Interactive session for gstep: slash command interface.
//!
//! Launch with `gstep session [file.json]`. Type `/help` for available
//! commands, Tab for completion.

use std::path::Path;

use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

use crate::cli::repl_commands::{self, SessionState};
use crate::cli::repl_complete::SessionHelper;
use crate::config::StepperConfig;

/// History file location.
fn history_path() -> std::path::PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    std::path::PathBuf::from(home).join(".gstep_history")
}

/// Run the interactive session, optionally starting from a document.
pub fn run(config: &StepperConfig, initial: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!();
    eprintln!("  gstep v{} - graph editor session", env!("CARGO_PKG_VERSION"));
    eprintln!("  Type /help for commands, /exit to quit.");
    eprintln!();

    let rl_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<SessionHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rl_config)?;
    rl.set_helper(Some(SessionHelper::new()));

    let hist_path = history_path();
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let mut state = SessionState::new(config);
    if let Some(path) = initial {
        match state.load(path) {
            Ok(summary) => eprintln!(
                "  Loaded {} nodes and {} edges from {}",
                summary.node_count,
                summary.edge_count,
                path.display()
            ),
            Err(e) => eprintln!("  Error: {e}"),
        }
    }

    loop {
        match rl.readline("gstep> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match repl_commands::execute(line, &mut state) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => eprintln!("  Error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  (Ctrl+C) Type /exit to quit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = rl.save_history(&hist_path);
    Ok(())
}
