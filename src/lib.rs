//! linkrank
//!
//! In-memory PageRank over a directed multigraph of string-labelled nodes.
//!
//! Ranks are computed for a fixed number of iterations with a damping factor.
//! Each iteration combines:
//! - a teleportation term `(1 - d) / N` for every node
//! - the rank of dangling nodes spread evenly over all nodes
//! - a floor/decay adjustment at 0.01 on that seed
//! - rank flowing along outgoing edges, weighted by edge multiplicity
//!
//! Nodes with no edges at all are pinned to zero.
//!
//! ## Example Usage
//!
//! ```rust
//! use linkrank::GraphStore;
//!
//! let mut store = GraphStore::new();
//! store.add_edge("google.com", "gmail.com");
//! store.add_edge("gmail.com", "maps.com");
//! store.add_edge("maps.com", "google.com");
//!
//! store.run(2, 0.85);
//!
//! let report = store.sorted_ranks();
//! assert_eq!(report[0].node, "gmail.com");
//! assert_eq!(report.len(), 3);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod input;
pub mod report;

// Re-export main types for convenience
pub use algo::{build_view, run, run_with, PageRankConfig, RANK_FLOOR};
pub use graph::{GraphError, GraphResult, GraphStore, NodeId};
pub use input::{load_edge_list, parse_edge_list, EdgeList, InputError, InputResult};
pub use report::{sorted_ranks, write_ranks, RankEntry};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
