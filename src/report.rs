//! Rank reporting
//!
//! Lists every node's rank sorted by label (plain byte-wise string order),
//! one `"<label> <score>"` line per node with two decimals.

use crate::graph::GraphStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// One line of the rank report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub node: String,
    pub score: f64,
}

impl fmt::Display for RankEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.node, self.score)
    }
}

/// All ranks sorted by label
pub fn sorted_ranks(store: &GraphStore) -> Vec<RankEntry> {
    let ranks = store.ranks();
    let mut entries: Vec<RankEntry> = store
        .nodes()
        .map(|(id, label)| RankEntry {
            node: label.to_string(),
            score: ranks[id.index()],
        })
        .collect();

    entries.sort_by(|a, b| a.node.cmp(&b.node));
    entries
}

/// Write the sorted report to `out`
pub fn write_ranks<W: Write>(store: &GraphStore, out: &mut W) -> io::Result<Vec<RankEntry>> {
    let entries = sorted_ranks(store);
    for entry in &entries {
        writeln!(out, "{}", entry)?;
    }
    out.flush()?;
    Ok(entries)
}

impl GraphStore {
    /// Print the sorted report to stdout and return its entries
    pub fn print_ranks(&self) -> io::Result<Vec<RankEntry>> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_ranks(self, &mut out)
    }

    /// See [`sorted_ranks`]
    pub fn sorted_ranks(&self) -> Vec<RankEntry> {
        sorted_ranks(self)
    }
}
