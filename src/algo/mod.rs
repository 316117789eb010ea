//! Rank engine
//!
//! The propagation step lives in the `linkrank-algorithms` crate and works on
//! a dense CSR view. This module builds that view from a `GraphStore`, drives
//! the iterations and writes each iteration's scores back into the store.

use crate::graph::{GraphError, GraphResult, GraphStore};
use linkrank_algorithms::GraphView;
use tracing::{debug, info};

// Re-export algorithms
pub use linkrank_algorithms::{
    apply_floor, dangling_nodes, page_rank, page_rank_step, PageRankConfig, RANK_FLOOR,
};

/// Build a GraphView from the store for algorithm execution
pub fn build_view(store: &GraphStore) -> GraphView {
    let (outgoing, incoming) = store.adjacency();
    GraphView::from_adjacency_list(store.node_count(), &outgoing, &incoming)
}

/// Run `iterations` rounds of rank propagation over `store`.
///
/// Accepts any damping factor; out-of-range values simply produce whatever
/// the arithmetic yields. An empty store is left untouched.
pub fn run(store: &mut GraphStore, iterations: usize, damping_factor: f64) {
    if iterations == 0 || store.is_empty() {
        return;
    }

    let view = build_view(store);
    let dangling = dangling_nodes(&view).count();

    for iteration in 0..iterations {
        let next = page_rank_step(&view, store.ranks(), damping_factor);
        store.replace_ranks(next);
        debug!(
            iteration,
            nodes = view.node_count,
            dangling,
            "rank iteration complete"
        );
    }

    info!(
        iterations,
        damping_factor,
        nodes = view.node_count,
        edges = view.edge_count(),
        "PageRank finished"
    );
}

/// Validate `config` and run it over `store`
pub fn run_with(store: &mut GraphStore, config: &PageRankConfig) -> GraphResult<()> {
    validate(config)?;
    run(store, config.iterations, config.damping_factor);
    Ok(())
}

/// Reject damping factors outside [0, 1]
pub fn validate(config: &PageRankConfig) -> GraphResult<()> {
    let d = config.damping_factor;
    if !d.is_finite() || !(0.0..=1.0).contains(&d) {
        return Err(GraphError::InvalidDampingFactor(d));
    }
    Ok(())
}

impl GraphStore {
    /// See [`run`]
    pub fn run(&mut self, iterations: usize, damping_factor: f64) {
        run(self, iterations, damping_factor);
    }

    /// See [`run_with`]
    pub fn run_with(&mut self, config: &PageRankConfig) -> GraphResult<()> {
        run_with(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_view_matches_store() {
        let store: GraphStore = vec![("a", "b"), ("a", "b"), ("b", "c")].into_iter().collect();
        let view = build_view(&store);

        assert_eq!(view.node_count, 3);
        assert_eq!(view.edge_count(), 3);
        assert_eq!(view.successors(0), &[1, 1]);
        assert_eq!(view.predecessors(2), &[1]);
        assert!(view.is_dangling(2));
    }

    #[test]
    fn test_run_writes_back_ranks() {
        let mut store: GraphStore = vec![("a", "b")].into_iter().collect();
        store.run(1, 0.85);

        let a = store.rank("a").unwrap();
        let b = store.rank("b").unwrap();
        assert!((a - 0.065).abs() < 1e-12);
        assert!((b - 0.065).abs() < 1e-12);
    }

    #[test]
    fn test_run_with_rejects_bad_damping() {
        let mut store: GraphStore = vec![("a", "b")].into_iter().collect();

        for d in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let config = PageRankConfig { damping_factor: d, iterations: 1 };
            assert!(matches!(
                store.run_with(&config),
                Err(GraphError::InvalidDampingFactor(_))
            ));
        }
        assert_eq!(store.rank("a"), Some(0.0));
    }

    #[test]
    fn test_run_with_default_config() {
        let mut store: GraphStore = vec![("a", "b")].into_iter().collect();
        store.run_with(&PageRankConfig::default()).unwrap();
        assert!(store.rank("b").unwrap() > store.rank("a").unwrap());
    }

    #[test]
    fn test_run_permits_out_of_range_damping() {
        let mut store: GraphStore = vec![("a", "b")].into_iter().collect();
        store.run(1, 2.0);
        // (1 - 2) / 2 is below the floor
        assert_eq!(store.rank("a"), Some(RANK_FLOOR));
    }
}
