//! In-memory link graph storage
//!
//! Nodes are interned string labels. Every label gets a dense `NodeId` the
//! first time it shows up, and all per-node state lives in vectors indexed by
//! that id:
//! - out_links: NodeId -> Vec<NodeId> (destinations, insertion order, duplicates kept)
//! - in_links: NodeId -> Vec<NodeId> (sources, mirror of out_links)
//! - rank: NodeId -> f64 (0.0 on first appearance)

use super::types::NodeId;
use indexmap::IndexSet;
use thiserror::Error;
use tracing::trace;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0:?} not found")]
    NodeNotFound(String),

    #[error("Invalid damping factor {0}: expected a finite value in [0, 1]")]
    InvalidDampingFactor(f64),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory directed multigraph with a rank per node
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Node registry: label <-> NodeId bijection
    nodes: IndexSet<String>,

    /// Outgoing edges for each node (adjacency list)
    out_links: Vec<Vec<NodeId>>,

    /// Incoming edges for each node (adjacency list)
    in_links: Vec<Vec<NodeId>>,

    /// Current rank of each node
    rank: Vec<f64>,

    /// Number of edges, parallel edges included
    edge_count: usize,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge `from -> to`, registering either endpoint if new.
    ///
    /// Self-loops and duplicate edges are stored as given. Existing ranks are
    /// left alone.
    pub fn add_edge(&mut self, from: &str, to: &str) -> (NodeId, NodeId) {
        let from_id = self.add_node(from);
        let to_id = self.add_node(to);

        self.out_links[from_id.index()].push(to_id);
        self.in_links[to_id.index()].push(from_id);
        self.edge_count += 1;

        (from_id, to_id)
    }

    /// Register a node without adding any edge. Returns the existing id if
    /// the label is already known.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(idx) = self.nodes.get_index_of(label) {
            return NodeId::new(idx);
        }

        let (idx, _) = self.nodes.insert_full(label.to_string());
        self.out_links.push(Vec::new());
        self.in_links.push(Vec::new());
        self.rank.push(0.0);
        trace!(node = label, id = idx, "registered node");

        NodeId::new(idx)
    }

    /// Number of nodes holding a rank entry
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up the id of a label
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.nodes.get_index_of(label).map(NodeId::new)
    }

    /// Look up the label of an id
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get_index(id.index()).map(String::as_str)
    }

    /// All nodes in order of first appearance
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, label)| (NodeId::new(idx), label.as_str()))
    }

    /// Destinations of a node's outgoing edges (empty for unknown ids)
    pub fn out_links(&self, id: NodeId) -> &[NodeId] {
        self.out_links.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sources of a node's incoming edges (empty for unknown ids)
    pub fn in_links(&self, id: NodeId) -> &[NodeId] {
        self.in_links.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a node has any incoming or outgoing edge
    pub fn has_links(&self, id: NodeId) -> bool {
        !self.out_links(id).is_empty() || !self.in_links(id).is_empty()
    }

    /// Current rank of a label
    pub fn rank(&self, label: &str) -> Option<f64> {
        self.node_id(label).map(|id| self.rank[id.index()])
    }

    /// Current rank of every node, indexed by `NodeId`
    pub fn ranks(&self) -> &[f64] {
        &self.rank
    }

    /// Overwrite the rank of an existing node
    pub fn set_rank(&mut self, label: &str, score: f64) -> GraphResult<()> {
        let id = self
            .node_id(label)
            .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))?;
        self.rank[id.index()] = score;
        Ok(())
    }

    /// Replace every rank at once
    pub(crate) fn replace_ranks(&mut self, next: Vec<f64>) {
        debug_assert_eq!(next.len(), self.rank.len());
        self.rank = next;
    }

    /// Adjacency lists as plain indices, for building an algorithm view
    pub(crate) fn adjacency(&self) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
        (to_indices(&self.out_links), to_indices(&self.in_links))
    }
}

fn to_indices(rows: &[Vec<NodeId>]) -> Vec<Vec<usize>> {
    rows.iter()
        .map(|row| row.iter().map(NodeId::index).collect())
        .collect()
}

impl<S: AsRef<str>> Extend<(S, S)> for GraphStore {
    fn extend<I: IntoIterator<Item = (S, S)>>(&mut self, edges: I) {
        for (from, to) in edges {
            self.add_edge(from.as_ref(), to.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, S)> for GraphStore {
    fn from_iter<I: IntoIterator<Item = (S, S)>>(edges: I) -> Self {
        let mut store = GraphStore::new();
        store.extend(edges);
        store
    }
}
