//! Slash command dispatch for the gstep session.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::commands;
use crate::cli::repl_complete::{suggest_command, COMMANDS};
use crate::config::StepperConfig;
use crate::engine::{ImportSummary, JsonImporter, MutationService};
use crate::graph::GraphStore;
use crate::types::{GraphResult, NodeId, Position, TraversalKind};

type CmdResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Session state: one graph and the services that edit it.
pub struct SessionState {
    /// The graph being edited.
    pub graph: GraphStore,
    mutations: MutationService,
    importer: JsonImporter,
    step_delay: Duration,
    /// Last document loaded with /load.
    pub source_path: Option<PathBuf>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&StepperConfig::default())
    }
}

impl SessionState {
    pub fn new(config: &StepperConfig) -> Self {
        Self {
            graph: GraphStore::new(),
            mutations: MutationService::from_config(config),
            importer: JsonImporter::from_config(config),
            step_delay: Duration::from_millis(config.step_delay_ms),
            source_path: None,
        }
    }

    /// Replace the graph with a document from disk.
    pub fn load(&mut self, path: &Path) -> GraphResult<ImportSummary> {
        let summary = self.importer.import_file(&mut self.graph, path)?;
        self.source_path = Some(path.to_path_buf());
        Ok(summary)
    }
}

/// Execute a slash command. Returns `true` if the session should end.
pub fn execute(input: &str, state: &mut SessionState) -> CmdResult<bool> {
    let input = input.trim();
    let input = input.strip_prefix('/').unwrap_or(input);
    if input.is_empty() {
        cmd_help();
        return Ok(false);
    }

    let (cmd, rest) = input.split_once(' ').unwrap_or((input, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    if let Some(kind) = TraversalKind::from_name(cmd) {
        cmd_traverse(kind, &args, state)?;
        return Ok(false);
    }

    match cmd {
        "exit" | "quit" => return Ok(true),
        "help" | "h" | "?" => cmd_help(),
        "add-node" => cmd_add_node(&args, state)?,
        "remove-node" => cmd_remove_node(&args, state)?,
        "add-edge" => cmd_add_edge(&args, state)?,
        "remove-edge" => cmd_remove_edge(&args, state)?,
        "move" => cmd_move(&args, state)?,
        "load" => cmd_load(rest, state)?,
        "show" => commands::print_graph(&state.graph),
        _ => {
            if let Some(suggestion) = suggest_command(cmd) {
                eprintln!("  Unknown command '/{cmd}'. Did you mean {suggestion}?");
            } else {
                eprintln!("  Unknown command '/{cmd}'. Type /help for commands.");
            }
        }
    }

    Ok(false)
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<14} {desc}");
    }
    eprintln!();
}

fn parse_id(token: Option<&&str>) -> Option<NodeId> {
    token.and_then(|s| s.parse().ok())
}

fn parse_f64(token: Option<&&str>) -> Option<f64> {
    token.and_then(|s| s.parse().ok())
}

fn cmd_add_node(args: &[&str], state: &mut SessionState) -> CmdResult<()> {
    let position = match args {
        [] => None,
        [x, y] => match (x.parse(), y.parse()) {
            (Ok(x), Ok(y)) => Some(Position::new(x, y)),
            _ => {
                eprintln!("  Usage: /add-node [x y]");
                return Ok(());
            }
        },
        _ => {
            eprintln!("  Usage: /add-node [x y]");
            return Ok(());
        }
    };
    let id = state.mutations.add_node(&mut state.graph, position);
    eprintln!("  Added node {id}");
    Ok(())
}

fn cmd_remove_node(args: &[&str], state: &mut SessionState) -> CmdResult<()> {
    let Some(id) = parse_id(args.first()) else {
        eprintln!("  Usage: /remove-node <id>");
        return Ok(());
    };
    state.mutations.remove_node(&mut state.graph, id)?;
    eprintln!("  Removed node {id}");
    Ok(())
}

fn cmd_add_edge(args: &[&str], state: &mut SessionState) -> CmdResult<()> {
    let (Some(source), Some(target)) = (parse_id(args.first()), parse_id(args.get(1))) else {
        eprintln!("  Usage: /add-edge <src> <dst> [weight]");
        return Ok(());
    };
    let weight = match args.get(2) {
        None => None,
        Some(_) => match parse_f64(args.get(2)) {
            Some(w) => Some(w),
            None => {
                eprintln!("  Weight must be a number");
                return Ok(());
            }
        },
    };
    match state
        .mutations
        .add_edge(&mut state.graph, source, target, weight)?
    {
        Some(previous) => eprintln!("  Updated edge {source} -> {target} (was {previous})"),
        None => eprintln!("  Added edge {source} -> {target}"),
    }
    Ok(())
}

fn cmd_remove_edge(args: &[&str], state: &mut SessionState) -> CmdResult<()> {
    let (Some(source), Some(target)) = (parse_id(args.first()), parse_id(args.get(1))) else {
        eprintln!("  Usage: /remove-edge <src> <dst>");
        return Ok(());
    };
    if state
        .mutations
        .remove_edge(&mut state.graph, source, target)
    {
        eprintln!("  Removed edge {source} -> {target}");
    }
    Ok(())
}

fn cmd_move(args: &[&str], state: &mut SessionState) -> CmdResult<()> {
    let (Some(id), Some(x), Some(y)) = (
        parse_id(args.first()),
        parse_f64(args.get(1)),
        parse_f64(args.get(2)),
    ) else {
        eprintln!("  Usage: /move <id> <x> <y>");
        return Ok(());
    };
    state
        .mutations
        .move_node(&mut state.graph, id, Position::new(x, y))?;
    Ok(())
}

fn cmd_traverse(kind: TraversalKind, args: &[&str], state: &mut SessionState) -> CmdResult<()> {
    let Some(start) = parse_id(args.first()) else {
        eprintln!("  Usage: /{} <id>", kind.name());
        return Ok(());
    };
    commands::play(&state.graph, kind, start, state.step_delay, false)?;
    Ok(())
}

fn cmd_load(path: &str, state: &mut SessionState) -> CmdResult<()> {
    if path.is_empty() {
        eprintln!("  Usage: /load <file.json>");
        return Ok(());
    }
    let path = Path::new(path);
    let summary = state.load(path)?;
    eprintln!(
        "  Loaded {} nodes and {} edges from {}",
        summary.node_count,
        summary.edge_count,
        path.display()
    );
    Ok(())
}
