//! Command-line front end: one-shot commands and the interactive session.

pub mod commands;
pub mod repl;
pub mod repl_commands;
pub mod repl_complete;
