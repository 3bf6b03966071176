//! High-level operations: mutation, import and traversal services.

pub mod import;
pub mod mutation;
pub mod traverse;

pub use import::{ImportSummary, JsonImporter};
pub use mutation::MutationService;
pub use traverse::TraversalEngine;
