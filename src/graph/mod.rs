//! In-memory graph: the core data structure and its traversals.

pub mod builder;
pub mod store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use store::{GraphSnapshot, GraphStore};
pub use traversal::{Bfs, Dfs, Traversal};
