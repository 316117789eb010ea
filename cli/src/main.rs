//! linkrank CLI: rank the nodes of an edge list
//!
//! Reads `<edge_count> <iterations>` followed by `<from> <to>` lines from a
//! file or stdin, runs PageRank and prints the sorted ranks.

use anyhow::{Context, Result};
use clap::Parser;
use comfy_table::{ContentArrangement, Table};
use linkrank::{load_edge_list, parse_edge_list, write_ranks, EdgeList, PageRankConfig, RankEntry};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank over a directed link graph")]
struct Cli {
    /// Edge list file (reads stdin when omitted)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Override the iteration count from the input header
    #[arg(long)]
    iterations: Option<usize>,

    /// Damping factor in [0, 1]
    #[arg(long, default_value_t = 0.85, env = "LINKRANK_DAMPING")]
    damping: f64,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Table,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a PageRankConfig,
    ranks: &'a [RankEntry],
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let edges = read_input(cli)?;
    let config = resolve_config(cli, &edges);

    let mut store = edges.to_store();
    store
        .run_with(&config)
        .context("invalid rank configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            write_ranks(&store, &mut out)?;
        }
        OutputFormat::Json => {
            let ranks = store.sorted_ranks();
            let report = JsonReport { config: &config, ranks: &ranks };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Table => {
            let ranks = store.sorted_ranks();
            writeln!(out, "{}", render_table(&ranks))?;
            writeln!(out, "{} node(s)", ranks.len())?;
        }
    }

    Ok(())
}

fn read_input(cli: &Cli) -> Result<EdgeList> {
    match &cli.input {
        Some(path) => load_edge_list(path)
            .with_context(|| format!("failed to read edge list from {}", path.display())),
        None => parse_edge_list(io::stdin().lock()).context("failed to read edge list from stdin"),
    }
}

fn resolve_config(cli: &Cli, edges: &EdgeList) -> PageRankConfig {
    let mut config = edges.config(cli.damping);
    if let Some(iterations) = cli.iterations {
        config.iterations = iterations;
    }
    config
}

fn render_table(ranks: &[RankEntry]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["node", "rank"]);

    for entry in ranks {
        table.add_row(vec![entry.node.clone(), format!("{:.2}", entry.score)]);
    }

    table
}
