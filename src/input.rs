//! Edge-list input
//!
//! Text format:
//!
//! ```text
//! <edge_count> <iterations>
//! <from> <to>
//! ...
//! ```
//!
//! Tokens are whitespace separated. Blank lines are skipped and anything
//! after the announced number of edges is ignored.

use crate::algo::PageRankConfig;
use crate::graph::GraphStore;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading an edge list
#[derive(Error, Debug)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Missing header line \"<edge_count> <iterations>\"")]
    MissingHeader,

    #[error("Line {line}: invalid header {content:?}, expected \"<edge_count> <iterations>\"")]
    InvalidHeader { line: usize, content: String },

    #[error("Line {line}: invalid edge {content:?}, expected \"<from> <to>\"")]
    InvalidEdge { line: usize, content: String },

    #[error("Expected {expected} edges, found {found}")]
    MissingEdges { expected: usize, found: usize },
}

pub type InputResult<T> = Result<T, InputError>;

const MAX_PREALLOCATED_EDGES: usize = 1024;

/// A parsed edge list
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList {
    /// Iteration count announced in the header
    pub iterations: usize,
    /// Edges in input order
    pub edges: Vec<(String, String)>,
}

impl EdgeList {
    /// Build a graph store from the edges
    pub fn to_store(&self) -> GraphStore {
        self.edges.iter().map(|(from, to)| (from.as_str(), to.as_str())).collect()
    }

    /// Rank configuration using the announced iteration count
    pub fn config(&self, damping_factor: f64) -> PageRankConfig {
        PageRankConfig {
            damping_factor,
            iterations: self.iterations,
        }
    }
}

/// Parse an edge list from any buffered reader
pub fn parse_edge_list<R: BufRead>(reader: R) -> InputResult<EdgeList> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|l| (idx + 1, l)))
        .filter(|res| !matches!(res, Ok((_, l)) if l.trim().is_empty()));

    let (header_line, header) = lines.next().ok_or(InputError::MissingHeader)??;
    let (expected, iterations) =
        parse_pair::<usize>(&header).ok_or_else(|| InputError::InvalidHeader {
            line: header_line,
            content: header.clone(),
        })?;

    // header count is untrusted, keep the preallocation bounded
    let mut edges = Vec::with_capacity(expected.min(MAX_PREALLOCATED_EDGES));
    for res in lines.take(expected) {
        let (line, content) = res?;
        let (from, to) = parse_pair::<String>(&content)
            .ok_or_else(|| InputError::InvalidEdge { line, content: content.clone() })?;
        edges.push((from, to));
    }

    if edges.len() < expected {
        return Err(InputError::MissingEdges {
            expected,
            found: edges.len(),
        });
    }

    debug!(edges = edges.len(), iterations, "parsed edge list");
    Ok(EdgeList { iterations, edges })
}

/// Read an edge list from a file
pub fn load_edge_list(path: impl AsRef<Path>) -> InputResult<EdgeList> {
    let file = File::open(path.as_ref())?;
    parse_edge_list(BufReader::new(file))
}

/// Exactly two whitespace-separated tokens
fn parse_pair<T: std::str::FromStr>(line: &str) -> Option<(T, T)> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?.parse().ok()?;
    let second = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((first, second))
}
