//! CLI entry point for the `gstep` command-line tool.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};

use graph_stepper::cli::{commands, repl};
use graph_stepper::config::{resolve_config, StepperConfig};
use graph_stepper::types::{GraphError, TraversalKind};

#[derive(Parser)]
#[command(
    name = "gstep",
    about = "gstep: build directed weighted graphs and step through BFS/DFS"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a gstep.toml config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import an adjacency-list document and print the graph
    Show {
        /// Path to the JSON document
        file: PathBuf,
    },
    /// Play a breadth-first traversal of an imported document
    Bfs {
        /// Path to the JSON document
        file: PathBuf,
        /// Starting node ID
        start_id: u64,
        /// Pause between steps in milliseconds (default from config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Play a depth-first traversal of an imported document
    Dfs {
        /// Path to the JSON document
        file: PathBuf,
        /// Starting node ID
        start_id: u64,
        /// Pause between steps in milliseconds (default from config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Open an interactive editing session
    Session {
        /// Document to load first
        file: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool, config: &StepperConfig) {
    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn exit_code(e: &GraphError) -> i32 {
    match e {
        GraphError::Io(_) => 1,
        GraphError::InvalidFormat(_) | GraphError::ImportFailed(_) => 2,
        GraphError::Config(_) => 3,
        GraphError::NotFound(_) | GraphError::EdgeNotFound { .. } => 4,
        GraphError::InvalidArgument(_) => 5,
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let config = match resolve_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
    };
    init_logging(cli.verbose, &config);

    let delay = |explicit: Option<u64>| {
        Duration::from_millis(explicit.unwrap_or(config.step_delay_ms))
    };

    let result = match cli.command {
        Commands::Show { file } => commands::cmd_show(&file, &config, json),
        Commands::Bfs {
            file,
            start_id,
            delay_ms,
        } => commands::cmd_traverse(
            &file,
            TraversalKind::Breadth,
            start_id,
            delay(delay_ms),
            &config,
            json,
        ),
        Commands::Dfs {
            file,
            start_id,
            delay_ms,
        } => commands::cmd_traverse(
            &file,
            TraversalKind::Depth,
            start_id,
            delay(delay_ms),
            &config,
            json,
        ),
        Commands::Session { file } => {
            if let Err(e) = repl::run(&config, file.as_deref()) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}
