//! Runs both search strategies over an edge list and prints their paths.
//!
//! Usage: `path-demo [EDGES_JSON START END]`, for example
//! `path-demo '[[0,1],[1,2],[2,3],[0,3]]' 0 3`. Without arguments a built-in
//! sample graph is searched. Set `RUST_LOG=debug` to see traversal logs.

use anyhow::{bail, Context, Result};
use graphwalk::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SAMPLE_EDGES: &str = "[[0,1],[1,2],[2,3],[0,3],[3,4],[4,4],[5,6]]";

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_args() -> Result<(String, i64, i64)> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok((SAMPLE_EDGES.to_string(), 0, 4)),
        [edges, start, end] => Ok((
            edges.clone(),
            start.parse().context("START must be an integer")?,
            end.parse().context("END must be an integer")?,
        )),
        _ => bail!("usage: path-demo [EDGES_JSON START END]"),
    }
}

/// Run one strategy and render its outcome
fn run_search(kind: SearchKind, graph: &Graph<i64>, start: i64, end: i64) -> Result<String> {
    let mut search = kind.build(graph.clone(), SearchConfig::default());
    search.set_start(start);
    search.set_end(end);

    let found = search.process()?;
    tracing::info!(
        strategy = %kind,
        start,
        end,
        found,
        length = search.result().len(),
        "Search finished"
    );

    let mut out = format!("\n[{}]\n", kind);
    if !found {
        out.push_str(&format!("No path from {} to {}\n", start, end));
    }
    out.push_str(&search.report().to_string());
    Ok(out)
}

fn main() -> Result<()> {
    init_tracing();

    let (edges, start, end) = parse_args()?;
    let graph: Graph<i64> = Graph::from_json(&edges).context("failed to read edge list")?;
    print!("{}", graph);

    for kind in SearchKind::ALL {
        print!("{}", run_search(kind, &graph, start, end)?);
    }

    Ok(())
}
