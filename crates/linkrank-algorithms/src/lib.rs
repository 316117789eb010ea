pub mod common;
pub mod pagerank;

pub use common::{GraphView, NodeIndex};
pub use pagerank::{apply_floor, dangling_nodes, page_rank, page_rank_step, PageRankConfig, RANK_FLOOR};
