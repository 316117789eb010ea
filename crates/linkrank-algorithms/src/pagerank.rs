//! PageRank algorithm implementation
//!
//! A fixed-iteration PageRank variant: teleportation plus uniformly
//! redistributed dangling mass, a floor/decay adjustment at 0.01, and an
//! override that pins isolated nodes to zero.

use super::common::{GraphView, NodeIndex};

/// Threshold of the floor/decay adjustment applied to every seeded score.
pub const RANK_FLOOR: f64 = 0.01;

/// PageRank configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Number of iterations
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 2,
        }
    }
}

/// Clamp a seeded score up to `RANK_FLOOR`, or take `RANK_FLOOR` off it.
#[inline]
pub fn apply_floor(score: f64) -> f64 {
    if score <= RANK_FLOOR {
        RANK_FLOOR
    } else {
        score - RANK_FLOOR
    }
}

/// Run a single iteration and return the next score vector.
///
/// `scores` holds the previous iteration's values and is only read, so every
/// node is updated from the same snapshot. An empty view yields an empty
/// vector.
pub fn page_rank_step(view: &GraphView, scores: &[f64], damping_factor: f64) -> Vec<f64> {
    let n = view.node_count;
    debug_assert_eq!(scores.len(), n);

    if n == 0 {
        return Vec::new();
    }

    let d = damping_factor;
    let n_f = n as f64;

    // Mass sitting on nodes without outgoing edges is spread over everyone
    let dangling_sum: f64 = (0..n)
        .filter(|&idx| view.is_dangling(idx))
        .map(|idx| scores[idx])
        .sum();
    let dangling_contribution = dangling_sum / n_f;

    let base_score = (1.0 - d) / n_f;
    let seeded = apply_floor(base_score + d * dangling_contribution);
    let mut next_scores = vec![seeded; n];

    for source in 0..n {
        let prior = scores[source];
        if prior == 0.0 || view.is_dangling(source) {
            continue;
        }

        let share = d * (prior / view.out_degree(source) as f64);
        for &target in view.successors(source) {
            next_scores[target] += share;
        }
    }

    for (idx, score) in next_scores.iter_mut().enumerate() {
        if view.is_isolated(idx) {
            *score = 0.0;
        }
    }

    next_scores
}

/// Run `config.iterations` iterations starting from `initial`.
pub fn page_rank(view: &GraphView, initial: &[f64], config: &PageRankConfig) -> Vec<f64> {
    let mut scores = initial.to_vec();

    if view.node_count == 0 {
        return scores;
    }

    for _ in 0..config.iterations {
        scores = page_rank_step(view, &scores, config.damping_factor);
    }

    scores
}

/// Indices of nodes with no outgoing edges
pub fn dangling_nodes(view: &GraphView) -> impl Iterator<Item = NodeIndex> + '_ {
    (0..view.node_count).filter(move |&idx| view.is_dangling(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn view_from_edges(node_count: usize, edges: &[(NodeIndex, NodeIndex)]) -> GraphView {
        let mut outgoing = vec![Vec::new(); node_count];
        let mut incoming = vec![Vec::new(); node_count];
        for &(u, v) in edges {
            outgoing[u].push(v);
            incoming[v].push(u);
        }
        GraphView::from_adjacency_list(node_count, &outgoing, &incoming)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_floor_adjustment() {
        assert_eq!(apply_floor(0.0), RANK_FLOOR);
        assert_eq!(apply_floor(0.01), RANK_FLOOR);
        assert_eq!(apply_floor(-3.0), RANK_FLOOR);
        assert_close(apply_floor(0.075), 0.065);
    }

    #[test]
    fn test_two_node_first_iteration() {
        // A(0) -> B(1), both start at zero so nothing propagates
        let view = view_from_edges(2, &[(0, 1)]);
        let next = page_rank_step(&view, &[0.0, 0.0], 0.85);
        assert_close(next[0], 0.065);
        assert_close(next[1], 0.065);
    }

    #[test]
    fn test_two_node_second_iteration() {
        let view = view_from_edges(2, &[(0, 1)]);
        let config = PageRankConfig { damping_factor: 0.85, iterations: 2 };
        let scores = page_rank(&view, &[0.0, 0.0], &config);

        // dangling B carries 0.065: seed = 0.075 + 0.85 * 0.0325 - 0.01
        let seeded = 0.075 + 0.85 * (0.065 / 2.0) - 0.01;
        assert_close(scores[0], seeded);
        assert_close(scores[1], seeded + 0.85 * 0.065);
    }

    #[test]
    fn test_parallel_edges_weigh_by_multiplicity() {
        // 0 -> 1 twice, 0 -> 2 once
        let view = view_from_edges(3, &[(0, 1), (0, 1), (0, 2)]);
        let next = page_rank_step(&view, &[0.3, 0.0, 0.0], 0.85);

        let seeded = 0.15 / 3.0 - 0.01;
        let share = 0.85 * 0.3 / 3.0;
        assert_close(next[0], seeded);
        assert_close(next[1], seeded + 2.0 * share);
        assert_close(next[2], seeded + share);
    }

    #[test]
    fn test_self_loop_feeds_itself() {
        let view = view_from_edges(2, &[(0, 0), (0, 1)]);
        let next = page_rank_step(&view, &[0.4, 0.0], 0.5);

        let seeded = 0.5 / 2.0 - 0.01;
        assert_close(next[0], seeded + 0.5 * 0.2);
        assert_close(next[1], seeded + 0.5 * 0.2);
    }

    #[test]
    fn test_zero_damping_disables_propagation() {
        let view = view_from_edges(3, &[(0, 1), (1, 2)]);
        let next = page_rank_step(&view, &[0.9, 0.9, 0.9], 0.0);
        for score in next {
            assert_close(score, 1.0 / 3.0 - 0.01);
        }
    }

    #[test]
    fn test_small_seed_is_clamped() {
        // 200 nodes in a chain: (1 - 0.85) / 200 is well below the floor
        let edges: Vec<_> = (0..199).map(|i| (i, i + 1)).collect();
        let view = view_from_edges(200, &edges);
        let next = page_rank_step(&view, &vec![0.0; 200], 0.85);
        assert!(next.iter().all(|&s| s == RANK_FLOOR));
    }

    #[test]
    fn test_isolated_nodes_forced_to_zero() {
        // node 2 has no edges at all
        let view = view_from_edges(3, &[(0, 1)]);
        let next = page_rank_step(&view, &[0.5, 0.5, 0.5], 0.85);
        assert_eq!(next[2], 0.0);
        assert!(next[0] > 0.0);
        assert!(next[1] > next[0]);
    }

    #[test]
    fn test_zero_iterations_is_identity() {
        let view = view_from_edges(2, &[(0, 1)]);
        let config = PageRankConfig { damping_factor: 0.85, iterations: 0 };
        assert_eq!(page_rank(&view, &[0.25, 0.75], &config), vec![0.25, 0.75]);
    }

    #[test]
    fn test_empty_view() {
        let view = GraphView::from_adjacency_list(0, &[], &[]);
        assert!(page_rank_step(&view, &[], 0.85).is_empty());
        assert!(page_rank(&view, &[], &PageRankConfig::default()).is_empty());
    }

    #[test]
    fn test_dangling_nodes() {
        let view = view_from_edges(3, &[(0, 1)]);
        assert_eq!(dangling_nodes(&view).collect::<Vec<_>>(), vec![1, 2]);
    }
}
