//! Core link graph implementation
//!
//! Directed multigraph over string labels with a rank per node:
//! - Nodes come into existence on first use as an edge endpoint
//! - Parallel edges and self-loops are kept
//! - Forward and reverse adjacency are stored side by side

pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::NodeId;
