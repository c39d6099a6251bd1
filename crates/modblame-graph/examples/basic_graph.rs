//! Basic graph construction and queries example.
//!
//! This example demonstrates:
//! - Parsing a `go mod graph` edge list
//! - Asking who depends on a module
//! - Isolating dependency cycles
//! - Merging module versions
//!
//! Run with `cargo run -p modblame-graph --example basic_graph`.

use std::io::Cursor;

use modblame_graph::{EmissionOrder, read_edges, retain_cycles};

const EDGES: &str = "\
example.com/app golang.org/x/net@v0.1.0
example.com/app golang.org/x/text@v0.3.7
golang.org/x/net@v0.1.0 golang.org/x/text@v0.3.0
golang.org/x/text@v0.3.7 golang.org/x/tools@v0.1.0
golang.org/x/tools@v0.1.0 golang.org/x/text@v0.3.7
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph = read_edges(Cursor::new(EDGES))?;
    println!("Parsed graph: {}", graph.statistics());

    // Who pulls in the old golang.org/x/text?
    let why = graph.subgraph_to(|m| m.ends_with("text@v0.3.0"));
    println!("\nChains ending at golang.org/x/text@v0.3.0:");
    for node in EmissionOrder::from_graph(why).nodes() {
        println!("  {node}");
    }

    let mut cycles = graph.clone();
    retain_cycles(&mut cycles);
    println!("\nModules on a cycle: {}", cycles.statistics());
    let mut members: Vec<_> = cycles.nodes().collect();
    members.sort();
    for node in members {
        println!("  {node}");
    }

    let merged = graph.map(|m| m.split_once('@').map_or(m.as_str(), |(path, _)| path).to_string());
    println!("\nWith versions merged: {}", merged.statistics());

    Ok(())
}
