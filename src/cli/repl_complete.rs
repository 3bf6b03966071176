//! Tab completion for the gstep interactive session.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;

/// All available session slash commands.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/add-node", "Add a node: /add-node [x y]"),
    ("/remove-node", "Remove a node and its edges: /remove-node <id>"),
    ("/add-edge", "Add or reweight an edge: /add-edge <src> <dst> [weight]"),
    ("/remove-edge", "Remove an edge: /remove-edge <src> <dst>"),
    ("/move", "Move a node: /move <id> <x> <y>"),
    ("/bfs", "Play a breadth-first traversal: /bfs <id> (alias /breadth)"),
    ("/dfs", "Play a depth-first traversal: /dfs <id> (alias /depth)"),
    ("/load", "Replace the graph with a JSON adjacency list"),
    ("/show", "Print nodes and edges"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the session"),
];

/// gstep session helper providing tab completion.
#[derive(Default)]
pub struct SessionHelper;

impl SessionHelper {
    pub fn new() -> Self {
        Self
    }

    /// List of .json files in the current directory.
    fn json_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        if let Ok(entries) = std::fs::read_dir(".") {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|e| e == "json") {
                    if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                        files.push(name.to_string());
                    }
                }
            }
        }
        files.sort();
        files
    }
}

impl Completer for SessionHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<14} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        match input.split_once(' ') {
            Some(("/load", args)) => {
                let prefix_start = input.len() - args.len();
                let matches: Vec<Pair> = self
                    .json_files()
                    .into_iter()
                    .filter(|f| f.starts_with(args.trim()))
                    .map(|f| Pair {
                        replacement: format!("{f} "),
                        display: f,
                    })
                    .collect();
                Ok((prefix_start, matches))
            }
            _ => Ok((pos, Vec::new())),
        }
    }
}

impl Hinter for SessionHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|(cmd, _)| cmd.starts_with(line) && *cmd != line)
            .map(|(cmd, _)| cmd[line.len()..].to_string())
    }
}

impl Highlighter for SessionHelper {}
impl Validator for SessionHelper {}
impl Helper for SessionHelper {}

/// Find closest matching command (Levenshtein).
pub fn suggest_command(input: &str) -> Option<&'static str> {
    let input_lower = input.to_lowercase();
    let mut best: Option<(&'static str, usize)> = None;

    for (cmd, _) in COMMANDS {
        let dist = levenshtein(&input_lower, &cmd[1..]);
        if dist <= 3 && best.map_or(true, |(_, d)| dist < d) {
            best = Some((cmd, dist));
        }
    }

    best.map(|(cmd, _)| cmd)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];
    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_len]
}
