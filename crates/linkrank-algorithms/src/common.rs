//! Shared utilities for rank computation
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution.

/// Dense node index (0..node_count)
pub type NodeIndex = usize;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Parallel edges are kept: a node linking twice to the same target appears
/// twice in its successor slice.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<NodeIndex>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<NodeIndex>,
}

impl GraphView {
    /// Get the out-degree of a node (by index), counting parallel edges
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: NodeIndex) -> &[NodeIndex] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: NodeIndex) -> &[NodeIndex] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// A node with no outgoing edges
    pub fn is_dangling(&self, idx: NodeIndex) -> bool {
        self.out_degree(idx) == 0
    }

    /// A node with neither incoming nor outgoing edges
    pub fn is_isolated(&self, idx: NodeIndex) -> bool {
        self.out_degree(idx) == 0 && self.in_degree(idx) == 0
    }

    /// Total number of edges, parallel edges included
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Build a view from per-node adjacency lists.
    ///
    /// `outgoing` and `incoming` must both have `node_count` rows.
    pub fn from_adjacency_list(
        node_count: usize,
        outgoing: &[Vec<NodeIndex>],
        incoming: &[Vec<NodeIndex>],
    ) -> Self {
        debug_assert_eq!(outgoing.len(), node_count);
        debug_assert_eq!(incoming.len(), node_count);

        let (out_offsets, out_targets) = flatten(outgoing);
        let (in_offsets, in_sources) = flatten(incoming);

        GraphView {
            node_count,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        }
    }
}

fn flatten(rows: &[Vec<NodeIndex>]) -> (Vec<usize>, Vec<NodeIndex>) {
    let mut offsets = Vec::with_capacity(rows.len() + 1);
    let mut flat = Vec::with_capacity(rows.iter().map(Vec::len).sum());

    offsets.push(0);
    for row in rows {
        flat.extend_from_slice(row);
        offsets.push(flat.len());
    }

    (offsets, flat)
}
